use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::surface::{IndicatorSurface, TrackSurface};
use super::timer::AutoAdvance;
use super::track::ExtendedTrack;

/// Pointer travel is amplified by this factor while dragging
const DRAG_SPEED: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_x: f64,
    start_offset: f64,
}

/// Looping carousel controller
///
/// Owns the cursor, the in-flight flag and the auto-advance timer. The host
/// forwards stimuli (`next`, `previous`, `select_indicator`, drag events)
/// and pumps `update` every frame so tween completion and timer fires are
/// observed. Only one transition may run at a time; requests arriving while
/// one is in flight are dropped, not queued.
#[derive(Debug)]
pub struct Carousel<I, T, D> {
    track: Option<ExtendedTrack<I>>,
    surface: Option<T>,
    indicators: Option<D>,
    /// Slot of the extended track in view, `1..=n` whenever settled
    cursor: usize,
    /// Target slot of the running transition
    in_flight: Option<usize>,
    /// Real index of the highlighted indicator
    active: usize,
    transition: Duration,
    timer: AutoAdvance,
    drag: Option<Drag>,
}

impl<I, T, D> Carousel<I, T, D>
where
    I: Clone,
    T: TrackSurface,
    D: IndicatorSurface,
{
    /// Create an inert carousel bound to its surfaces
    ///
    /// Nothing happens until `initialize` is called with at least one item.
    pub fn new(surface: T, indicators: D, transition: Duration) -> Self {
        Self {
            track: None,
            surface: Some(surface),
            indicators: Some(indicators),
            cursor: 0,
            in_flight: None,
            active: 0,
            transition,
            timer: AutoAdvance::new(Duration::ZERO),
            drag: None,
        }
    }

    /// Build the extended track and indicators, show the first item and
    /// start auto-advancing
    ///
    /// With no items (or after `destroy`) the carousel stays inert.
    pub fn initialize(&mut self, items: &[I], auto_advance: Duration, now: Instant) {
        let Some(track) = ExtendedTrack::build(items) else {
            debug!("Carousel has no items, skipping initialization");
            return;
        };
        let (Some(surface), Some(indicators)) = (self.surface.as_mut(), self.indicators.as_mut())
        else {
            debug!("Carousel surfaces released, skipping initialization");
            return;
        };

        indicators.populate(track.len());
        indicators.set_active(0);
        surface.snap_to(-surface.slot_width());

        info!(
            items = track.len(),
            auto_advance_ms = auto_advance.as_millis() as u64,
            "Carousel initialized"
        );

        self.track = Some(track);
        self.cursor = 1;
        self.active = 0;
        self.in_flight = None;
        self.drag = None;
        self.timer = AutoAdvance::new(auto_advance);
        self.timer.start(now);
    }

    /// Move to `target` slot of the extended track
    ///
    /// Returns false when the request was dropped: a transition or drag is in
    /// progress, the target is outside the track, or the carousel is inert.
    /// The slot width is read from the surface on every call.
    pub fn go_to(&mut self, target: usize, animated: bool, now: Instant) -> bool {
        let (Some(track), Some(surface)) = (self.track.as_ref(), self.surface.as_mut()) else {
            return false;
        };

        if self.in_flight.is_some() || self.drag.is_some() {
            debug!(slot = target, "Transition in progress, dropping move");
            return false;
        }
        if target >= track.slot_count() {
            debug!(slot = target, slots = track.slot_count(), "Move target outside track");
            return false;
        }

        let offset = -(target as f64) * surface.slot_width();
        self.cursor = target;
        self.in_flight = Some(target);

        if animated && !self.transition.is_zero() {
            surface.tween_to(offset, self.transition, now);
        } else {
            surface.snap_to(offset);
            self.settle();
        }

        true
    }

    pub fn next(&mut self, now: Instant) {
        self.go_to(self.cursor + 1, true, now);
        self.restart_timer(now);
    }

    pub fn previous(&mut self, now: Instant) {
        self.go_to(self.cursor.saturating_sub(1), true, now);
        self.restart_timer(now);
    }

    /// Jump straight to a real item, e.g. from a clicked dot
    pub fn select_indicator(&mut self, index: usize, now: Instant) {
        if index >= self.len() {
            debug!(index, "Indicator index out of range");
            return;
        }
        self.go_to(index + 1, true, now);
        self.restart_timer(now);
    }

    /// Auto-advance step; leaves the timer schedule alone
    pub fn tick(&mut self, now: Instant) {
        self.go_to(self.cursor + 1, true, now);
    }

    /// Pump tween completion and the auto-advance timer
    pub fn update(&mut self, now: Instant) {
        if self.in_flight.is_some() {
            let finished = self
                .surface
                .as_mut()
                .is_some_and(|surface| surface.poll_finished(now));
            if finished {
                self.settle();
            }
        }

        if self.timer.fire_if_due(now) {
            debug!(cursor = self.cursor, "Auto-advance tick");
            self.tick(now);
        }
    }

    /// Begin a pointer drag at `x`; refused while a transition is running
    pub fn drag_start(&mut self, x: f64) -> bool {
        if self.track.is_none() || self.in_flight.is_some() {
            return false;
        }
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };

        self.drag = Some(Drag {
            start_x: x,
            start_offset: surface.offset(),
        });
        true
    }

    /// Follow the pointer and preview the nearest item on the indicators
    pub fn drag_move(&mut self, x: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let (Some(track), Some(surface), Some(indicators)) = (
            self.track.as_ref(),
            self.surface.as_mut(),
            self.indicators.as_mut(),
        ) else {
            return;
        };

        let width = surface.slot_width();
        let min_offset = (-((track.slot_count() - 1) as f64) * width).min(0.0);
        let offset = (drag.start_offset + (x - drag.start_x) * DRAG_SPEED).clamp(min_offset, 0.0);
        surface.snap_to(offset);

        let slot = nearest_slot(offset, width, track.slot_count(), self.cursor);
        indicators.set_active(track.real_index(slot));
    }

    /// Release the drag and settle on the nearest slot
    pub fn drag_end(&mut self, now: Instant) {
        if self.drag.take().is_none() {
            return;
        }
        let (Some(track), Some(surface)) = (self.track.as_ref(), self.surface.as_ref()) else {
            return;
        };

        let slot = nearest_slot(
            surface.offset(),
            surface.slot_width(),
            track.slot_count(),
            self.cursor,
        );
        self.go_to(slot, true, now);
        self.restart_timer(now);
    }

    /// Re-apply the settled offset after the layout changed
    ///
    /// Running transitions keep their target; the next move picks up the new
    /// width anyway.
    pub fn relayout(&mut self) {
        if self.track.is_none() || self.in_flight.is_some() || self.drag.is_some() {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            let offset = -(self.cursor as f64) * surface.slot_width();
            surface.snap_to(offset);
        }
    }

    /// Stop the timer and release the surfaces; safe to call repeatedly
    pub fn destroy(&mut self) {
        self.timer.cancel();
        self.in_flight = None;
        self.drag = None;
        if self.track.take().is_some() {
            info!("Carousel destroyed");
        }
        self.surface = None;
        self.indicators = None;
    }

    /// Completion step of a move: re-snap clone slots, clear the in-flight
    /// flag, then refresh the active indicator
    fn settle(&mut self) {
        let Some(target) = self.in_flight else {
            return;
        };
        let (Some(track), Some(surface)) = (self.track.as_ref(), self.surface.as_mut()) else {
            self.in_flight = None;
            return;
        };

        let n = track.len();
        if target == 0 {
            self.cursor = n;
            surface.snap_to(-(n as f64) * surface.slot_width());
        } else if target > n {
            self.cursor = 1;
            surface.snap_to(-surface.slot_width());
        }

        self.in_flight = None;
        self.active = (self.cursor - 1) % n;
        if let Some(indicators) = self.indicators.as_mut() {
            indicators.set_active(self.active);
        }
    }

    fn restart_timer(&mut self, now: Instant) {
        if self.track.is_some() {
            self.timer.restart(now);
        }
    }
}

impl<I, T, D> Carousel<I, T, D> {
    /// True once initialized with items and not yet destroyed
    pub fn is_live(&self) -> bool {
        self.track.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_indicator(&self) -> usize {
        self.active
    }

    /// Number of real items
    pub fn len(&self) -> usize {
        self.track.as_ref().map_or(0, ExtendedTrack::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn track(&self) -> Option<&ExtendedTrack<I>> {
        self.track.as_ref()
    }

    pub fn surface(&self) -> Option<&T> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut T> {
        self.surface.as_mut()
    }

    pub fn indicators(&self) -> Option<&D> {
        self.indicators.as_ref()
    }

    pub fn timer(&self) -> &AutoAdvance {
        &self.timer
    }
}

/// Slot closest to `offset`, or `fallback` when the layout has no width
fn nearest_slot(offset: f64, width: f64, slot_count: usize, fallback: usize) -> usize {
    if width <= 0.0 {
        return fallback;
    }
    ((-offset / width).round().max(0.0) as usize).min(slot_count - 1)
}
