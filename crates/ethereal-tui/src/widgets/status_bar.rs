use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::theme::Palette;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let focus_str = match app.focus {
            Focus::Carousel => "CAROUSEL",
            Focus::Form(_) => "FORM",
        };

        let state_str = if app.carousel.is_dragging() {
            "dragging"
        } else if app.carousel.is_animating() {
            "moving"
        } else {
            "idle"
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | {}/{} | {} | {}",
                focus_str,
                app.carousel.active_indicator() + 1,
                app.carousel.len(),
                state_str,
                app.viewport.classify().label(),
            )
        };

        let help_hint = match app.focus {
            Focus::Carousel => " q:quit h/l:slide 1-9:jump c:contact m:menu ",
            Focus::Form(_) => " Tab:field Enter:send Esc:back ",
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Palette::FG0).bg(Palette::BG2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(Palette::BG2)),
            Span::styled(
                help_hint,
                Style::default().fg(Palette::GREY).bg(Palette::BG2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
