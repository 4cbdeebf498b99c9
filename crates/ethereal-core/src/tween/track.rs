use std::time::{Duration, Instant};

use super::animation::OffsetTween;
use super::easing::EasingType;
use crate::carousel::TrackSurface;

/// Default [`TrackSurface`]: an [`OffsetTween`] plus the slot width the host
/// last measured
#[derive(Debug, Clone)]
pub struct TweenTrack {
    tween: OffsetTween,
    slot_width: f64,
}

impl TweenTrack {
    pub fn new(slot_width: f64, easing: EasingType) -> Self {
        Self {
            tween: OffsetTween::new(easing),
            slot_width,
        }
    }

    /// Record a new slot width after the layout changed
    pub fn set_slot_width(&mut self, width: f64) {
        self.slot_width = width;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_animating()
    }

    /// Advance the running tween and return the offset to draw
    pub fn update(&mut self, now: Instant) -> f64 {
        self.tween.update(now)
    }
}

impl TrackSurface for TweenTrack {
    fn slot_width(&self) -> f64 {
        self.slot_width
    }

    fn offset(&self) -> f64 {
        self.tween.current()
    }

    fn snap_to(&mut self, offset: f64) {
        self.tween.set(offset);
    }

    fn tween_to(&mut self, offset: f64, duration: Duration, now: Instant) {
        self.tween.tween_to(offset, duration, now);
    }

    fn poll_finished(&mut self, now: Instant) -> bool {
        self.tween.update(now);
        self.tween.take_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_finished_after_duration() {
        let start = Instant::now();
        let mut track = TweenTrack::new(100.0, EasingType::Linear);
        track.snap_to(-100.0);
        track.tween_to(-200.0, Duration::from_millis(600), start);

        assert!(!track.poll_finished(start + Duration::from_millis(300)));
        assert!((track.offset() + 150.0).abs() < 0.001);
        assert!(track.poll_finished(start + Duration::from_millis(600)));
        assert!(!track.poll_finished(start + Duration::from_millis(700)));
        assert_eq!(track.offset(), -200.0);
    }

    #[test]
    fn test_slot_width_follows_layout() {
        let mut track = TweenTrack::new(100.0, EasingType::Linear);
        track.set_slot_width(64.0);
        assert_eq!(track.slot_width(), 64.0);
    }
}
