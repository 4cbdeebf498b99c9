//! Time calculation utilities for tweens

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    progress_at(now.saturating_duration_since(start), duration)
}

/// Progress (0.0 to 1.0) after `elapsed` of a `duration`-long animation
#[inline]
pub fn progress_at(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, -100.0, 0.5) + 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_clamped() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert!((progress(start, d, start + Duration::from_millis(100)) - 0.5).abs() < 0.001);
        assert!((progress(start, d, start + Duration::from_secs(5)) - 1.0).abs() < 0.001);
        assert!(!is_complete(start, d, start + Duration::from_millis(199)));
        assert!(is_complete(start, d, start + d));
    }
}
