pub mod carousel;
pub mod config;
pub mod error;
pub mod form;
pub mod preloader;
pub mod testimonials;
pub mod tween;
pub mod viewport;

pub use carousel::{Carousel, DotRow, IndicatorSurface, TrackSurface};
pub use config::{AppConfig, CarouselConfig, EasingType};
pub use error::{Error, Result};
pub use testimonials::Testimonial;
pub use tween::TweenTrack;
