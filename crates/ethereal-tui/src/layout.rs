use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::NavLink;

/// Screen regions of the page, recomputed from the terminal size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub menu: Rect,
    pub hero: Rect,
    /// Bordered box around the carousel
    pub carousel: Rect,
    /// Inside of the carousel box; cards slide through here
    pub track: Rect,
    pub dots: Rect,
    pub form: Rect,
    pub status: Rect,
}

impl PageLayout {
    pub fn compute(area: Rect, menu_open: bool) -> Self {
        let menu_rows = if menu_open {
            NavLink::ALL.len() as u16 + 2
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Header
                Constraint::Length(menu_rows), // Mobile menu
                Constraint::Length(5),         // Hero
                Constraint::Min(7),            // Carousel
                Constraint::Length(1),         // Dots
                Constraint::Length(9),         // Contact form
                Constraint::Length(1),         // Status bar
            ])
            .split(area);

        let carousel = chunks[3];
        let track = Block::default().borders(Borders::ALL).inner(carousel);

        Self {
            header: chunks[0],
            menu: chunks[1],
            hero: chunks[2],
            carousel,
            track,
            dots: chunks[4],
            form: chunks[5],
            status: chunks[6],
        }
    }
}

/// True when the cell at (`column`, `row`) lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
