//! Hardware context

/// Every collaborator the control loop talks to
///
/// Owned by the [`ModeController`](super::ModeController) and lent to
/// whichever screen is active.
pub struct Board<D, B, S, I, V, C> {
    /// Panel renderer
    pub display: D,
    /// Front buttons
    pub buttons: B,
    /// Gallery record and profile text
    pub store: S,
    /// Gallery bitmaps and badge portrait
    pub images: I,
    /// Battery sense circuit
    pub battery: V,
    /// Monotonic clock
    pub clock: C,
}
