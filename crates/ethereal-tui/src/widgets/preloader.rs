use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

use ethereal_core::preloader::{Preloader, Stage};

use crate::theme::{fade, Palette};

pub struct PreloaderWidget;

impl PreloaderWidget {
    /// Draw the intro over the whole `area`
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        preloader: &Preloader,
        elapsed: Duration,
        title: &str,
        caption: &str,
    ) {
        // The overlay fades toward the page background
        let overlay = fade(Palette::BG2, Palette::BG0, preloader.overlay_opacity(elapsed));
        frame.render_widget(Block::default().style(Style::default().bg(overlay)), area);

        let opacity = preloader.content_opacity(elapsed);
        if opacity <= 0.0 {
            return;
        }

        let width = 40.min(area.width);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // Title
                Constraint::Length(1), // Caption
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Progress
                Constraint::Fill(1),
            ])
            .split(column);

        let shown: String = title.chars().take(preloader.visible_title_chars(elapsed)).collect();
        let title_color = fade(Palette::FG0, overlay, opacity);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                shown,
                Style::default().fg(title_color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[1],
        );

        let caption_opacity = preloader.stage_progress(Stage::CaptionFade, elapsed) * opacity;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                caption.to_string(),
                Style::default().fg(fade(Palette::FG1, overlay, caption_opacity)),
            )))
            .alignment(Alignment::Center),
            rows[2],
        );

        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(fade(Palette::ACCENT, overlay, opacity))
                    .bg(Palette::BG1),
            )
            .label("")
            .ratio(preloader.progress_bar(elapsed).clamp(0.0, 1.0));
        frame.render_widget(gauge, rows[4]);
    }
}
