//! Viewport classification and resize debouncing

use std::time::{Duration, Instant};

use tracing::debug;

/// Viewports at least this wide (logical pixels) are desktop
pub const DESKTOP_BREAKPOINT: u32 = 992;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn label(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Desktop => "desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    breakpoint: u32,
}

impl Viewport {
    pub fn new(width: u32, breakpoint: u32) -> Self {
        Self { width, breakpoint }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn classify(&self) -> Breakpoint {
        if self.width < self.breakpoint {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.classify() == Breakpoint::Mobile
    }

    /// The hero background effect only runs on desktop layouts
    pub fn background_effect_enabled(&self) -> bool {
        !self.is_mobile()
    }

    /// Apply a new width, returning true when the classification changed
    pub fn resize(&mut self, width: u32) -> bool {
        let before = self.classify();
        self.width = width;
        let changed = before != self.classify();
        if changed {
            debug!(width, breakpoint = self.classify().label(), "Viewport breakpoint changed");
        }
        changed
    }
}

/// Collapses a burst of resize notifications into one
///
/// Each notification pushes the deadline out; `poll` yields the last width
/// once the viewport has been quiet for the configured delay.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<(Instant, u32)>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn notify(&mut self, width: u32, now: Instant) {
        self.pending = Some((now + self.delay, width));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        match self.pending {
            Some((deadline, width)) if now >= deadline => {
                self.pending = None;
                Some(width)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_threshold() {
        assert_eq!(Viewport::new(991, DESKTOP_BREAKPOINT).classify(), Breakpoint::Mobile);
        assert_eq!(Viewport::new(992, DESKTOP_BREAKPOINT).classify(), Breakpoint::Desktop);
        assert!(!Viewport::new(375, DESKTOP_BREAKPOINT).background_effect_enabled());
        assert!(Viewport::new(1440, DESKTOP_BREAKPOINT).background_effect_enabled());
    }

    #[test]
    fn test_resize_reports_classification_change() {
        let mut viewport = Viewport::new(1200, DESKTOP_BREAKPOINT);
        assert!(!viewport.resize(1000));
        assert!(viewport.resize(800));
        assert!(viewport.is_mobile());
        assert!(viewport.resize(992));
    }

    #[test]
    fn test_debouncer_yields_last_width_after_quiet_period() {
        let start = Instant::now();
        let delay = Duration::from_millis(250);
        let mut debouncer = ResizeDebouncer::new(delay);

        debouncer.notify(800, start);
        debouncer.notify(900, start + Duration::from_millis(100));
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), Some(900));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }
}
