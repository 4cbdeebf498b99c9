//! Offset tween state machine
//!
//! Combines easing functions and timing utilities to move a single numeric
//! offset from its current value to a target over a fixed duration.

use std::time::{Duration, Instant};

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};

/// Active tween state
#[derive(Debug, Clone)]
struct ActiveTween {
    /// Tween start time
    start: Instant,
    /// Starting offset
    from: f64,
    /// Target offset
    to: f64,
    /// Tween duration
    duration: Duration,
}

/// Offset tween controller
///
/// Call `tween_to()` to begin, then `update()` each frame to advance.
/// Completion is latched and handed out once through `take_finished()`.
#[derive(Debug, Clone)]
pub struct OffsetTween {
    /// Current active tween (if any)
    active: Option<ActiveTween>,
    /// Easing curve for new tweens
    easing: EasingType,
    /// Current offset (always up-to-date)
    current: f64,
    /// Set when a tween reaches its target, cleared by `take_finished`
    finished: bool,
}

impl Default for OffsetTween {
    fn default() -> Self {
        Self::new(EasingType::default())
    }
}

impl OffsetTween {
    pub fn new(easing: EasingType) -> Self {
        Self {
            active: None,
            easing,
            current: 0.0,
            finished: false,
        }
    }

    pub fn set_easing(&mut self, easing: EasingType) {
        self.easing = easing;
    }

    /// Check if a tween is currently running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Final offset of the running tween, or the current offset when idle
    pub fn target(&self) -> f64 {
        self.active.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Set the offset immediately, dropping any running tween without
    /// reporting completion
    pub fn set(&mut self, offset: f64) {
        self.active = None;
        self.finished = false;
        self.current = offset;
    }

    /// Start a tween from the current offset to `target`
    ///
    /// A zero duration applies the target immediately and latches completion.
    pub fn tween_to(&mut self, target: f64, duration: Duration, now: Instant) {
        self.finished = false;

        if duration.is_zero() {
            self.current = target;
            self.active = None;
            self.finished = true;
            return;
        }

        self.active = Some(ActiveTween {
            start: now,
            from: self.current,
            to: target,
            duration,
        });
    }

    /// Advance the tween and return the current offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref tween) = self.active {
            if is_complete(tween.start, tween.duration, now) {
                self.current = tween.to;
                self.active = None;
                self.finished = true;
            } else {
                let t = progress(tween.start, tween.duration, now);
                self.current = lerp(tween.from, tween.to, self.easing.apply(t));
            }
        }

        self.current
    }

    /// Returns true once after a tween has reached its target
    pub fn take_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }
}
