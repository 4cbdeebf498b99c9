//! Frame-driven tweening for track offsets
//!
//! The carousel hands target offsets to a [`TrackSurface`](crate::carousel::TrackSurface);
//! this module provides the default surface, which interpolates the offset
//! over time and reports completion exactly once per tween.
//!
//! - `easing` - pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation helpers
//! - `animation` - [`OffsetTween`], the interpolating state machine
//! - `track` - [`TweenTrack`], an `OffsetTween` plus the current slot width
//!
//! # Usage
//!
//! ```ignore
//! let mut track = TweenTrack::new(slot_width, EasingType::Power2InOut);
//! track.tween_to(-2.0 * slot_width, Duration::from_millis(600), now);
//!
//! // every frame
//! let offset = track.update(Instant::now());
//! ```

pub mod animation;
pub mod easing;
pub mod timing;
pub mod track;

pub use animation::OffsetTween;
pub use track::TweenTrack;

use std::time::Duration;

/// Site-wide animation durations
pub const DURATION_SHORT: Duration = Duration::from_millis(300);
pub const DURATION_MEDIUM: Duration = Duration::from_millis(600);
pub const DURATION_LONG: Duration = Duration::from_millis(1000);
