use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use ethereal_core::{Testimonial, TrackSurface};

use crate::app::{App, Focus};
use crate::theme::Palette;

/// Horizontal padding inside each card
const CARD_PADDING: u16 = 3;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, track_area: Rect, app: &App) {
        let border_color = if app.focus == Focus::Carousel {
            Palette::ACCENT
        } else {
            Palette::GREY
        };

        let block = Block::default()
            .title(" What clients say ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(Palette::BG0));
        frame.render_widget(block, area);

        let Some(track) = app.carousel.track() else {
            let empty = Paragraph::new("No testimonials yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Palette::GREY));
            frame.render_widget(empty, track_area);
            return;
        };

        let offset = app.track_offset();
        let slot_width = app
            .carousel
            .surface()
            .map_or(f64::from(track_area.width), |surface| surface.slot_width());

        for (slot, testimonial) in track.slots().iter().enumerate() {
            let left = f64::from(track_area.x) + slot as f64 * slot_width + offset;
            let Some((visible, skip)) = clip_card(left.round() as i64, track_area) else {
                continue;
            };
            render_card(frame, visible, skip, track_area.width, testimonial);
        }
    }
}

/// Visible part of a card whose left edge sits at column `left`
///
/// Returns the on-screen rect and how many leading card columns are cut off.
fn clip_card(left: i64, track: Rect) -> Option<(Rect, u16)> {
    let track_left = i64::from(track.x);
    let track_right = track_left + i64::from(track.width);
    let right = left + i64::from(track.width);

    let start = left.max(track_left);
    let end = right.min(track_right);
    if start >= end {
        return None;
    }

    let rect = Rect::new(start as u16, track.y, (end - start) as u16, track.height);
    Some((rect, (start - left) as u16))
}

fn render_card(frame: &mut Frame, visible: Rect, skip: u16, card_width: u16, item: &Testimonial) {
    let text_width = card_width.saturating_sub(CARD_PADDING * 2) as usize;
    let pad = " ".repeat(CARD_PADDING as usize);

    let mut lines: Vec<Line> = wrap_text(&format!("\u{201c}{}\u{201d}", item.quote), text_width)
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                format!("{}{}", pad, line),
                Style::default().fg(Palette::FG0).add_modifier(Modifier::ITALIC),
            ))
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled(
            item.author.clone(),
            Style::default().fg(Palette::ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    if !item.role.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(pad),
            Span::styled(item.role.clone(), Style::default().fg(Palette::GREY)),
        ]));
    }

    frame.render_widget(Block::default().style(Style::default().bg(Palette::BG1)), visible);

    // Center vertically
    let top = visible.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect {
        y: visible.y + top,
        height: visible.height - top,
        ..visible
    };
    frame.render_widget(Paragraph::new(lines).scroll((0, skip)), inner);
}

/// Greedy word wrap measured in display columns
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            // Hard-break words longer than a line
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// What a click on the dots row landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotHit {
    Previous,
    Next,
    Dot(usize),
}

/// Columns of the previous arrow, first dot and next arrow for `count` dots
/// centred in `area`: `‹  ● ○ ○  ›`
fn dot_columns(area: Rect, count: usize) -> (u16, u16, u16) {
    let total = (count as u16).saturating_mul(2).saturating_add(5);
    let start = area.x + area.width.saturating_sub(total) / 2;
    (start, start + 3, start + total.saturating_sub(1))
}

/// Hit-test a click at `column` against the dots row
pub fn dot_hit(area: Rect, count: usize, column: u16) -> Option<DotHit> {
    if count == 0 {
        return None;
    }
    let (prev, first_dot, next) = dot_columns(area, count);
    if column == prev {
        return Some(DotHit::Previous);
    }
    if column == next {
        return Some(DotHit::Next);
    }
    if column >= first_dot && (column - first_dot) % 2 == 0 {
        let index = usize::from((column - first_dot) / 2);
        if index < count {
            return Some(DotHit::Dot(index));
        }
    }
    None
}

pub struct DotsWidget;

impl DotsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(dots) = app.carousel.indicators() else {
            return;
        };
        if dots.is_empty() {
            return;
        }

        let (prev, _, _) = dot_columns(area, dots.len());
        let arrow = Style::default().fg(Palette::FG1);

        let mut spans = vec![Span::styled("\u{2039}  ", arrow)];
        for (i, active) in dots.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if active {
                spans.push(Span::styled("\u{25cf}", Style::default().fg(Palette::ACCENT)));
            } else {
                spans.push(Span::styled("\u{25cb}", Style::default().fg(Palette::GREY)));
            }
        }
        spans.push(Span::styled("  \u{203a}", arrow));

        let row = Rect {
            x: prev,
            width: area.width.saturating_sub(prev - area.x),
            ..area
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_wrap_text_breaks_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_wrap_text_counts_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(wrap_text("漢字漢字", 4), vec!["漢字", "漢字"]);
    }

    #[test]
    fn test_clip_card() {
        let track = Rect::new(10, 0, 20, 5);
        assert_eq!(clip_card(10, track), Some((Rect::new(10, 0, 20, 5), 0)));
        // Half scrolled out to the left
        assert_eq!(clip_card(0, track), Some((Rect::new(10, 0, 10, 5), 10)));
        // Peeking in from the right
        assert_eq!(clip_card(25, track), Some((Rect::new(25, 0, 5, 5), 0)));
        assert_eq!(clip_card(30, track), None);
        assert_eq!(clip_card(-10, track), None);
    }

    #[test]
    fn test_dot_hit() {
        // 3 dots: total 11 columns centred in 21 -> starts at 5
        let area = Rect::new(0, 0, 21, 1);
        assert_eq!(dot_hit(area, 3, 5), Some(DotHit::Previous));
        assert_eq!(dot_hit(area, 3, 8), Some(DotHit::Dot(0)));
        assert_eq!(dot_hit(area, 3, 9), None);
        assert_eq!(dot_hit(area, 3, 12), Some(DotHit::Dot(2)));
        assert_eq!(dot_hit(area, 3, 15), Some(DotHit::Next));
        assert_eq!(dot_hit(area, 0, 5), None);
    }
}
