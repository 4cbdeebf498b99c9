//! Intro sequence played before the page is shown
//!
//! A fixed script of overlapping segments laid out like an animation
//! timeline: each segment is placed relative to the current end of the
//! timeline, optionally overlapping it or leaving a gap.

use std::time::Duration;

use crate::config::EasingType;
use crate::tween::timing::progress_at;
use crate::tween::{DURATION_LONG, DURATION_MEDIUM, DURATION_SHORT};

/// Delay between consecutive title characters
const TITLE_STAGGER: Duration = Duration::from_millis(50);
const OVERLAP: Duration = Duration::from_millis(500);
const HOLD: Duration = Duration::from_millis(500);
const PROGRESS_FILL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TitleReveal,
    CaptionFade,
    ProgressFill,
    ContentExit,
    OverlayFade,
    Done,
}

/// Where a segment goes relative to the end of the timeline so far
#[derive(Debug, Clone, Copy)]
pub enum Position {
    After,
    Overlap(Duration),
    Gap(Duration),
}

#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub stage: Stage,
    pub start: Duration,
    pub duration: Duration,
    pub easing: EasingType,
}

impl Segment {
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// Eased progress of this segment at `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let t = progress_at(elapsed.saturating_sub(self.start), self.duration);
        self.easing.apply(t)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<Segment>,
    end: Duration,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        stage: Stage,
        duration: Duration,
        easing: EasingType,
        position: Position,
    ) -> &mut Self {
        let start = match position {
            Position::After => self.end,
            Position::Overlap(by) => self.end.saturating_sub(by),
            Position::Gap(by) => self.end + by,
        };
        let segment = Segment {
            stage,
            start,
            duration,
            easing,
        };
        self.end = self.end.max(segment.end());
        self.segments.push(segment);
        self
    }

    pub fn end(&self) -> Duration {
        self.end
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// The preloader script for a title of `title_chars` characters
#[derive(Debug, Clone)]
pub struct Preloader {
    timeline: Timeline,
    title_chars: usize,
}

impl Preloader {
    pub fn new(title_chars: usize) -> Self {
        let stagger = TITLE_STAGGER * title_chars.saturating_sub(1) as u32;

        let mut timeline = Timeline::new();
        timeline
            .push(
                Stage::TitleReveal,
                DURATION_MEDIUM + stagger,
                EasingType::Cubic,
                Position::After,
            )
            .push(
                Stage::CaptionFade,
                DURATION_SHORT,
                EasingType::Linear,
                Position::Overlap(OVERLAP),
            )
            .push(
                Stage::ProgressFill,
                PROGRESS_FILL,
                EasingType::Power4InOut,
                Position::Overlap(OVERLAP),
            )
            .push(
                Stage::ContentExit,
                DURATION_MEDIUM,
                EasingType::Cubic,
                Position::Gap(HOLD),
            )
            .push(
                Stage::OverlayFade,
                DURATION_LONG,
                EasingType::Linear,
                Position::Gap(HOLD),
            );

        Self {
            timeline,
            title_chars,
        }
    }

    pub fn total(&self) -> Duration {
        self.timeline.end()
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    /// Most recently started stage, or `Done` once the script has ended
    pub fn stage_at(&self, elapsed: Duration) -> Stage {
        if self.is_finished(elapsed) {
            return Stage::Done;
        }
        self.timeline
            .segments()
            .iter()
            .filter(|s| s.start <= elapsed)
            .max_by_key(|s| s.start)
            .map_or(Stage::TitleReveal, |s| s.stage)
    }

    /// Eased progress of `stage` at `elapsed` (0 before it starts, 1 after)
    pub fn stage_progress(&self, stage: Stage, elapsed: Duration) -> f64 {
        match stage {
            Stage::Done => {
                if self.is_finished(elapsed) {
                    1.0
                } else {
                    0.0
                }
            }
            _ => self
                .timeline
                .segments()
                .iter()
                .find(|s| s.stage == stage)
                .map_or(0.0, |s| s.progress(elapsed)),
        }
    }

    /// Title characters revealed so far
    pub fn visible_title_chars(&self, elapsed: Duration) -> usize {
        if self.title_chars == 0 {
            return 0;
        }
        let started = (elapsed.as_millis() / TITLE_STAGGER.as_millis()) as usize + 1;
        started.min(self.title_chars)
    }

    pub fn progress_bar(&self, elapsed: Duration) -> f64 {
        self.stage_progress(Stage::ProgressFill, elapsed)
    }

    /// Opacity of the preloader content (title, caption, bar)
    pub fn content_opacity(&self, elapsed: Duration) -> f64 {
        1.0 - self.stage_progress(Stage::ContentExit, elapsed)
    }

    /// Opacity of the overlay covering the page
    pub fn overlay_opacity(&self, elapsed: Duration) -> f64 {
        1.0 - self.stage_progress(Stage::OverlayFade, elapsed)
    }
}
