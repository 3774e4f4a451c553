//! Autoscroll deadline

/// Deadline after which the gallery steps on its own
///
/// Restarted with the idle delay after manual navigation and with the
/// autoscroll period after it fires. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AutoscrollTimer {
    deadline_ms: u64,
}

impl AutoscrollTimer {
    /// Timer that fires `delay_ms` after `now_ms`
    pub fn starting_at(now_ms: u64, delay_ms: u32) -> Self {
        Self {
            deadline_ms: now_ms.saturating_add(u64::from(delay_ms)),
        }
    }

    /// Move the deadline to `delay_ms` after `now_ms`
    pub fn restart(&mut self, now_ms: u64, delay_ms: u32) {
        *self = Self::starting_at(now_ms, delay_ms);
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_at_deadline() {
        let timer = AutoscrollTimer::starting_at(1_000, 500);
        assert!(!timer.is_due(1_499));
        assert!(timer.is_due(1_500));
        assert!(timer.is_due(9_999));
    }

    #[test]
    fn test_restart_moves_deadline() {
        let mut timer = AutoscrollTimer::starting_at(0, 100);
        timer.restart(90, 100);
        assert_eq!(timer.deadline_ms(), 190);
        assert!(!timer.is_due(150));
    }

    #[test]
    fn test_no_overflow() {
        let timer = AutoscrollTimer::starting_at(u64::MAX - 1, 10);
        assert_eq!(timer.deadline_ms(), u64::MAX);
    }
}
