use std::time::{Duration, Instant};

/// The visual track the carousel moves
///
/// Offsets are in the same unit as `slot_width`; slot `k` is in view at
/// offset `-k * slot_width`.
pub trait TrackSurface {
    /// Width of one slot including the inter-item gap, measured now
    fn slot_width(&self) -> f64;

    /// Offset currently applied to the track
    fn offset(&self) -> f64;

    /// Apply `offset` immediately, cancelling any running tween
    fn snap_to(&mut self, offset: f64);

    /// Start tweening from the current offset to `offset`
    fn tween_to(&mut self, offset: f64, duration: Duration, now: Instant);

    /// Returns true exactly once after a tween started with `tween_to` ends
    fn poll_finished(&mut self, now: Instant) -> bool;
}

/// The row of dots under the carousel
pub trait IndicatorSurface {
    /// Create `count` indicators, none active
    fn populate(&mut self, count: usize);

    /// Mark `index` active and every other indicator inactive
    fn set_active(&mut self, index: usize);
}
