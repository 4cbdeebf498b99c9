use std::time::{Duration, Instant};

/// Cancellable auto-advance schedule
///
/// Re-arms itself every time it fires. Manual interaction calls `restart`,
/// which pushes the next fire a full interval away. A zero interval never
/// arms.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arm the timer one interval after `now`
    pub fn start(&mut self, now: Instant) {
        if self.interval.is_zero() {
            return;
        }
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancel the pending fire and schedule a new one
    pub fn restart(&mut self, now: Instant) {
        self.cancel();
        self.start(now);
    }

    /// Returns true when the deadline has passed, re-arming for the next
    /// interval. Missed intervals collapse into a single fire.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECS: Duration = Duration::from_secs(5);

    #[test]
    fn test_fires_after_interval_and_rearms() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(FIVE_SECS);
        timer.start(start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(4999)));
        assert!(timer.fire_if_due(start + FIVE_SECS));
        assert!(!timer.fire_if_due(start + FIVE_SECS));
        assert!(timer.fire_if_due(start + FIVE_SECS * 2));
    }

    #[test]
    fn test_restart_pushes_deadline() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(FIVE_SECS);
        timer.start(start);

        timer.restart(start + Duration::from_secs(4));
        assert!(!timer.fire_if_due(start + Duration::from_secs(6)));
        assert!(timer.fire_if_due(start + Duration::from_secs(9)));
    }

    #[test]
    fn test_cancel_and_zero_interval() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(FIVE_SECS);
        timer.start(start);
        timer.cancel();
        assert!(!timer.fire_if_due(start + FIVE_SECS * 10));

        let mut disabled = AutoAdvance::new(Duration::ZERO);
        disabled.start(start);
        assert!(!disabled.is_armed());
    }

    #[test]
    fn test_missed_intervals_fire_once() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(FIVE_SECS);
        timer.start(start);

        let late = start + Duration::from_secs(23);
        assert!(timer.fire_if_due(late));
        assert!(!timer.fire_if_due(late));
        assert_eq!(timer.deadline(), Some(late + FIVE_SECS));
    }
}
