mod carousel;
mod form;
mod header;
mod hero;
mod preloader;
mod status_bar;

pub use carousel::{dot_hit, wrap_text, CarouselWidget, DotHit, DotsWidget};
pub use form::ContactFormWidget;
pub use header::{HeaderWidget, MenuWidget};
pub use hero::HeroWidget;
pub use preloader::PreloaderWidget;
pub use status_bar::StatusBarWidget;
