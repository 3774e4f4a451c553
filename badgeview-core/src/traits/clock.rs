//! Monotonic time source

/// Monotonic clock with a fixed-duration wait
///
/// All timing in the core is expressed as milliseconds since an
/// arbitrary origin. Values never go backwards.
pub trait Clock {
    /// Milliseconds since the clock origin
    fn now_ms(&self) -> u64;

    /// Wait for `ms` milliseconds
    fn pause(&mut self, ms: u32) -> impl core::future::Future<Output = ()>;
}
