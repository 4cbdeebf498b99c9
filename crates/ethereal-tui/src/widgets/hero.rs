use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::theme::{fade, Palette};

/// Milliseconds per twinkle phase of the background
const TWINKLE_MS: u128 = 400;

pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(Palette::BG0)),
            area,
        );

        if app.viewport.background_effect_enabled() {
            let phase = (app.uptime(now).as_millis() / TWINKLE_MS) as u32;
            frame.render_widget(Starfield { phase }, area);
        }

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "We craft ethereal digital experiences",
                Style::default().fg(Palette::FG0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Design \u{00b7} Motion \u{00b7} Engineering",
                Style::default().fg(Palette::FG1),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

/// Sparse twinkling dots behind the hero text
struct Starfield {
    phase: u32,
}

impl Starfield {
    fn is_star(&self, x: u16, y: u16) -> bool {
        let seed = u32::from(x).wrapping_mul(7) ^ u32::from(y).wrapping_mul(13);
        seed % 11 == 0
    }

    fn brightness(&self, x: u16, y: u16) -> f64 {
        let seed = u32::from(x)
            .wrapping_mul(31)
            .wrapping_add(u32::from(y).wrapping_mul(17))
            .wrapping_add(self.phase);
        f64::from(seed % 4) / 3.0
    }
}

impl Widget for Starfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if !self.is_star(x, y) {
                    continue;
                }
                let color = fade(Palette::GLOW, Palette::BG0, 0.2 + 0.5 * self.brightness(x, y));
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('\u{00b7}').set_fg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starfield_is_sparse() {
        let area = Rect::new(0, 0, 80, 5);
        let mut buf = Buffer::empty(area);
        Starfield { phase: 0 }.render(area, &mut buf);

        let stars = buf.content().iter().filter(|c| c.symbol() == "\u{00b7}").count();
        assert!(stars > 0);
        assert!(stars < 80 * 5 / 4);
    }
}
