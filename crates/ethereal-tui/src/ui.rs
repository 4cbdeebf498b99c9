use std::time::Instant;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::widgets::{
    CarouselWidget, ContactFormWidget, DotsWidget, HeaderWidget, HeroWidget, MenuWidget,
    PreloaderWidget, StatusBarWidget,
};
use crate::theme::Palette;

/// Draw one frame of the page
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    // The page stays hidden until the overlay is mostly transparent
    if let Some((preloader, elapsed)) = app.preloader(now) {
        if preloader.overlay_opacity(elapsed) > 0.5 {
            PreloaderWidget::render(
                frame,
                area,
                preloader,
                elapsed,
                &app.config.preloader.title,
                &app.config.preloader.caption,
            );
            return;
        }
    }

    frame.render_widget(Block::default().style(Style::default().bg(Palette::BG0)), area);

    let layout = app.layout();
    HeaderWidget::render(frame, layout.header, app);
    MenuWidget::render(frame, layout.menu, app);
    HeroWidget::render(frame, layout.hero, app, now);
    CarouselWidget::render(frame, layout.carousel, layout.track, app);
    DotsWidget::render(frame, layout.dots, app);
    ContactFormWidget::render(frame, layout.form, app);
    StatusBarWidget::render(frame, layout.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use ethereal_core::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    fn render(app: &App, width: u16, height: u16, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_page_shows_first_testimonial() {
        let now = Instant::now();
        let mut config = AppConfig::default();
        config.preloader.enabled = false;
        let author = config.carousel.testimonials[0].author.clone();
        let app = App::new(Arc::new(config), Rect::new(0, 0, 140, 40), now);

        let screen = render(&app, 140, 40, now);
        assert!(screen.contains(&author));
        assert!(screen.contains("Get in touch"));
    }

    #[test]
    fn test_preloader_covers_page() {
        let now = Instant::now();
        let app = App::new(Arc::new(AppConfig::default()), Rect::new(0, 0, 100, 30), now);

        let screen = render(&app, 100, 30, now + Duration::from_millis(1000));
        assert!(screen.contains("Ethereal"));
        assert!(!screen.contains("Get in touch"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let now = Instant::now();
        let mut config = AppConfig::default();
        config.preloader.enabled = false;
        let app = App::new(Arc::new(config), Rect::new(0, 0, 12, 6), now);
        render(&app, 12, 6, now);
    }
}
