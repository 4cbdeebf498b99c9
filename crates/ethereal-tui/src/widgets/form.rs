use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use ethereal_core::form::{Field, FormStatus};

use crate::app::{App, Focus};
use crate::theme::Palette;

/// Width of the label column
const LABEL_WIDTH: usize = 10;

pub struct ContactFormWidget;

impl ContactFormWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let focused = matches!(app.focus, Focus::Form(_));
        let border_color = if focused {
            Palette::ACCENT
        } else {
            Palette::GREY
        };

        let block = Block::default()
            .title(" Get in touch ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(Palette::BG0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 2);
        let mut lines: Vec<Line> = Field::ALL
            .iter()
            .map(|field| field_line(app, *field, value_width))
            .collect();

        lines.push(Line::default());
        lines.push(status_line(app.contact.status()));

        let submit_hint = if app.contact.is_sending() {
            Span::styled(" [ Sending... ] ", Style::default().fg(Palette::GREY))
        } else {
            Span::styled(
                " [ Enter: Send ] ",
                Style::default().fg(Palette::ACCENT).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(vec![
            submit_hint,
            Span::styled(
                " Tab: next field  Esc: back",
                Style::default().fg(Palette::GREY),
            ),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn field_line(app: &App, field: Field, value_width: usize) -> Line<'static> {
    let active = app.focus == Focus::Form(field);
    let invalid = app.contact.is_invalid(field);

    let label = if field.is_required() {
        format!("{}*", field.label())
    } else {
        field.label().to_string()
    };
    let label_style = if invalid {
        Style::default().fg(Palette::ERROR)
    } else if active {
        Style::default().fg(Palette::ACCENT)
    } else {
        Style::default().fg(Palette::FG1)
    };

    let value = tail_to_width(app.contact.form.value(field), value_width.saturating_sub(1));
    let value_style = if active {
        Style::default().fg(Palette::FG0).bg(Palette::BG2)
    } else {
        Style::default().fg(Palette::FG0)
    };
    let cursor = if active { "\u{2588}" } else { "" };

    Line::from(vec![
        Span::styled(format!(" {:<width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Palette::ACCENT)),
    ])
}

fn status_line(status: &FormStatus) -> Line<'static> {
    let color = match status {
        FormStatus::Idle => return Line::default(),
        FormStatus::Sending => Palette::INFO,
        FormStatus::Success(_) => Palette::SUCCESS,
        FormStatus::Error(_) => Palette::ERROR,
    };
    let message = status.message().unwrap_or_default().to_string();
    Line::from(Span::styled(format!(" {}", message), Style::default().fg(color)))
}

/// Keep the end of `text` that fits in `width` columns, so typing stays visible
fn tail_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut kept = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}
