use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Focus, NavLink};
use crate::theme::Palette;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Palette::BG2))
            .style(Style::default().bg(Palette::BG0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let brand = Line::from(vec![
            Span::styled(" \u{25c6} ", Style::default().fg(Palette::ACCENT)),
            Span::styled(
                "ETHEREAL STUDIOS",
                Style::default().fg(Palette::FG0).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(brand), inner);

        // Narrow layouts collapse the links behind a toggle
        let nav = if app.viewport.is_mobile() {
            let icon = if app.menu.is_open() { "\u{2715}" } else { "\u{2630}" };
            Line::from(Span::styled(
                format!("{} menu (m) ", icon),
                Style::default().fg(Palette::FG1),
            ))
        } else {
            let mut spans = Vec::new();
            for link in NavLink::ALL {
                let current = matches!(
                    (link, app.focus),
                    (NavLink::Testimonials, Focus::Carousel) | (NavLink::Contact, Focus::Form(_))
                );
                let style = if current {
                    Style::default().fg(Palette::ACCENT).add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Palette::FG1)
                };
                spans.push(Span::styled(link.label(), style));
                spans.push(Span::raw("   "));
            }
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(nav).alignment(Alignment::Right), inner);
    }
}

/// Dropdown list of navigation links under the header
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }

        let items: Vec<ListItem> = NavLink::ALL
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let style = if i == app.menu.selected() {
                    Style::default()
                        .fg(Palette::BG0)
                        .bg(Palette::ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Palette::FG0)
                };
                ListItem::new(format!("  {}", link.label())).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Palette::ACCENT))
                .style(Style::default().bg(Palette::BG1)),
        );
        frame.render_widget(list, area);
    }
}
