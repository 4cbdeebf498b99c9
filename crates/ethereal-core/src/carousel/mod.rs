//! Looping testimonial carousel
//!
//! The carousel keeps a cursor into an *extended track*: the real items with
//! a clone of the last item in front and a clone of the first item at the
//! end. Moves onto a clone are settled by silently snapping the cursor back
//! to the matching real slot, which makes the loop look endless with only two
//! extra slots.
//!
//! - `track` - [`ExtendedTrack`], slot layout and slot → item mapping
//! - `surface` - collaborator traits the controller drives
//! - `indicators` - [`DotRow`], an in-memory indicator surface
//! - `timer` - [`AutoAdvance`], the cancellable auto-advance schedule
//! - `controller` - [`Carousel`], the state machine itself

pub mod controller;
pub mod indicators;
pub mod surface;
pub mod timer;
pub mod track;

pub use controller::Carousel;
pub use indicators::DotRow;
pub use surface::{IndicatorSurface, TrackSurface};
pub use timer::AutoAdvance;
pub use track::ExtendedTrack;
