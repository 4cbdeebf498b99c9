use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ethereal_core::form::{ContactFormState, Field, Submission, SubmissionOutcome};
use ethereal_core::preloader::Preloader;
use ethereal_core::viewport::{ResizeDebouncer, Viewport};
use ethereal_core::{AppConfig, Carousel, DotRow, Testimonial, TrackSurface, TweenTrack};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::input::Action;
use crate::layout::{contains, PageLayout};
use crate::widgets::{dot_hit, DotHit};

pub type TestimonialCarousel = Carousel<Testimonial, TweenTrack, DotRow>;

/// Which part of the page receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Carousel,
    Form(Field),
}

/// Targets of the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Testimonials,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 2] = [NavLink::Testimonials, NavLink::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Testimonials => "Testimonials",
            NavLink::Contact => "Contact",
        }
    }
}

/// Collapsible navigation shown on narrow terminals
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    open: bool,
    selected: usize,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < NavLink::ALL.len() {
            self.selected += 1;
        }
    }

    /// Follow the selected link; the menu closes behind it
    pub fn choose(&mut self) -> NavLink {
        self.open = false;
        NavLink::ALL[self.selected.min(NavLink::ALL.len() - 1)]
    }
}

/// Terminal columns between two cards
pub fn gap_columns(config: &AppConfig) -> u16 {
    let px = config.ui.px_per_column.max(1);
    ((config.carousel.item_gap + px / 2) / px).max(1) as u16
}

/// Distance between the left edges of two neighbouring cards
pub fn slot_width(track_width: u16, gap: u16) -> f64 {
    f64::from(track_width) + f64::from(gap)
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub carousel: TestimonialCarousel,
    pub viewport: Viewport,
    resize: ResizeDebouncer,
    pub contact: ContactFormState,
    pub focus: Focus,
    pub menu: NavMenu,
    preloader: Option<(Preloader, Instant)>,
    size: Rect,
    started: Instant,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, size: Rect, now: Instant) -> Self {
        let layout = PageLayout::compute(size, false);
        let track = TweenTrack::new(
            slot_width(layout.track.width, gap_columns(&config)),
            config.carousel.easing,
        );
        let mut carousel = Carousel::new(track, DotRow::new(), config.carousel.transition());
        carousel.initialize(
            &config.carousel.testimonials,
            config.carousel.auto_advance(),
            now,
        );

        let viewport = Viewport::new(
            u32::from(size.width) * config.ui.px_per_column,
            config.ui.mobile_breakpoint,
        );
        let preloader = config
            .preloader
            .enabled
            .then(|| (Preloader::new(config.preloader.title.chars().count()), now));

        info!(
            items = carousel.len(),
            breakpoint = viewport.classify().label(),
            "App initialized"
        );

        Self {
            resize: ResizeDebouncer::new(config.ui.resize_debounce()),
            contact: ContactFormState::new(config.form.status_hide()),
            config,
            carousel,
            viewport,
            focus: Focus::Carousel,
            menu: NavMenu::default(),
            preloader,
            size,
            started: now,
            should_quit: false,
            status_message: None,
        }
    }

    /// Current page layout for the last known terminal size
    pub fn layout(&self) -> PageLayout {
        PageLayout::compute(self.size, self.menu.is_open())
    }

    pub fn is_preloading(&self) -> bool {
        self.preloader.is_some()
    }

    /// Preloader script and time since it started, while it is playing
    pub fn preloader(&self, now: Instant) -> Option<(&Preloader, Duration)> {
        self.preloader
            .as_ref()
            .map(|(preloader, started)| (preloader, now.saturating_duration_since(*started)))
    }

    /// Time since the app started, drives the hero background
    pub fn uptime(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.is_preloading() || self.carousel.is_animating() || self.carousel.is_dragging()
    }

    /// Offset of the card track in columns
    pub fn track_offset(&self) -> f64 {
        self.carousel.surface().map_or(0.0, |track| track.offset())
    }

    /// Apply an input action; returns a submission to deliver in the background
    pub fn apply(&mut self, action: Action, now: Instant) -> Option<Submission> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SkipPreloader => {
                if self.preloader.take().is_some() {
                    debug!("Preloader skipped");
                }
            }
            Action::Next => self.carousel.next(now),
            Action::Previous => self.carousel.previous(now),
            Action::SelectIndicator(index) => self.carousel.select_indicator(index, now),
            Action::FocusForm => self.focus = Focus::Form(Field::Name),
            Action::FocusCarousel => self.focus = Focus::Carousel,
            Action::ToggleMenu => self.menu.toggle(),
            Action::MenuUp => self.menu.move_up(),
            Action::MenuDown => self.menu.move_down(),
            Action::MenuChoose => {
                self.focus = match self.menu.choose() {
                    NavLink::Testimonials => Focus::Carousel,
                    NavLink::Contact => Focus::Form(Field::Name),
                };
            }
            Action::NextField => self.cycle_field(1),
            Action::PrevField => self.cycle_field(Field::ALL.len() - 1),
            Action::InputChar(c) => {
                if let Focus::Form(field) = self.focus {
                    self.contact.form.value_mut(field).push(c);
                }
            }
            Action::Backspace => {
                if let Focus::Form(field) = self.focus {
                    self.contact.form.value_mut(field).pop();
                }
            }
            Action::Submit => return self.contact.submit(now),
            Action::None => {}
        }
        None
    }

    fn cycle_field(&mut self, step: usize) {
        if let Focus::Form(field) = self.focus {
            let index = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
            self.focus = Focus::Form(Field::ALL[(index + step) % Field::ALL.len()]);
        }
    }

    /// Route mouse input: drag on the track, click on dots and arrows
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.is_preloading() {
            return;
        }
        let layout = self.layout();
        let x = f64::from(mouse.column);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(layout.track, mouse.column, mouse.row) {
                    self.carousel.drag_start(x);
                } else if contains(layout.dots, mouse.column, mouse.row) {
                    match dot_hit(layout.dots, self.carousel.len(), mouse.column) {
                        Some(DotHit::Previous) => self.carousel.previous(now),
                        Some(DotHit::Next) => self.carousel.next(now),
                        Some(DotHit::Dot(index)) => self.carousel.select_indicator(index, now),
                        None => {}
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.carousel.drag_move(x),
            MouseEventKind::Up(MouseButton::Left) => self.carousel.drag_end(now),
            _ => {}
        }
    }

    /// Terminal resized: re-measure the track now, debounce the breakpoint
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.size = Rect::new(0, 0, width, height);
        let track_width = self.layout().track.width;
        let gap = gap_columns(&self.config);
        if let Some(track) = self.carousel.surface_mut() {
            track.set_slot_width(slot_width(track_width, gap));
        }
        self.carousel.relayout();
        self.resize
            .notify(u32::from(width) * self.config.ui.px_per_column, now);
    }

    pub fn on_submission(&mut self, outcome: SubmissionOutcome, now: Instant) {
        self.contact.complete(outcome, now);
    }

    /// Advance every time-driven piece of state to `now`
    pub fn update(&mut self, now: Instant) {
        if let Some((preloader, started)) = &self.preloader {
            if preloader.is_finished(now.saturating_duration_since(*started)) {
                self.preloader = None;
                info!("Preloader finished");
            }
        }

        self.carousel.update(now);
        self.contact.update(now);

        if let Some(width) = self.resize.poll(now) {
            if self.viewport.resize(width) {
                self.status_message = Some(format!(
                    " Layout switched to {} ",
                    self.viewport.classify().label()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ethereal_core::form::FormStatus;

    fn test_config() -> Arc<AppConfig> {
        let mut config = AppConfig::default();
        config.preloader.enabled = false;
        Arc::new(config)
    }

    fn app(now: Instant) -> App {
        App::new(test_config(), Rect::new(0, 0, 140, 40), now)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_gap_columns_from_pixels() {
        let config = AppConfig::default();
        assert_eq!(gap_columns(&config), 4);
        assert_eq!(slot_width(100, 4), 104.0);
    }

    #[test]
    fn test_new_app_starts_on_first_card() {
        let now = Instant::now();
        let app = app(now);
        assert_eq!(app.carousel.cursor(), 1);
        assert_eq!(app.carousel.active_indicator(), 0);
        assert_eq!(app.track_offset(), -slot_width(app.layout().track.width, 4));
        assert!(!app.viewport.is_mobile());
    }

    #[test]
    fn test_next_action_animates_and_settles() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::Next, now);
        assert!(app.needs_fast_update());

        app.update(now + Duration::from_millis(700));
        assert_eq!(app.carousel.active_indicator(), 1);
        assert!(!app.needs_fast_update());
    }

    #[test]
    fn test_preloader_blocks_until_skipped() {
        let now = Instant::now();
        let mut app = App::new(Arc::new(AppConfig::default()), Rect::new(0, 0, 140, 40), now);
        assert!(app.is_preloading());
        app.apply(Action::SkipPreloader, now);
        assert!(!app.is_preloading());
    }

    #[test]
    fn test_preloader_ends_on_its_own() {
        let now = Instant::now();
        let mut app = App::new(Arc::new(AppConfig::default()), Rect::new(0, 0, 140, 40), now);
        app.update(now + Duration::from_secs(10));
        assert!(!app.is_preloading());
    }

    #[test]
    fn test_menu_choice_moves_focus_and_closes() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::ToggleMenu, now);
        assert!(app.menu.is_open());
        app.apply(Action::MenuDown, now);
        app.apply(Action::MenuChoose, now);
        assert!(!app.menu.is_open());
        assert_eq!(app.focus, Focus::Form(Field::Name));
    }

    #[test]
    fn test_typing_and_field_cycling() {
        let now = Instant::now();
        let mut app = app(now);
        app.apply(Action::FocusForm, now);
        for c in "Adaa".chars() {
            app.apply(Action::InputChar(c), now);
        }
        app.apply(Action::Backspace, now);
        assert_eq!(app.contact.form.name, "Ada");

        app.apply(Action::PrevField, now);
        assert_eq!(app.focus, Focus::Form(Field::Message));
        app.apply(Action::NextField, now);
        assert_eq!(app.focus, Focus::Form(Field::Name));
    }

    #[test]
    fn test_submit_returns_payload_once_valid() {
        let now = Instant::now();
        let mut app = app(now);
        assert!(app.apply(Action::Submit, now).is_none());

        app.contact.form.name = "Ada".to_string();
        app.contact.form.email = "ada@example.com".to_string();
        app.contact.form.message = "Hi".to_string();
        let submission = app.apply(Action::Submit, now);
        assert!(submission.is_some());

        app.on_submission(SubmissionOutcome::Delivered, now);
        assert!(matches!(app.contact.status(), FormStatus::Success(_)));
        assert!(app.contact.form.name.is_empty());
    }

    #[test]
    fn test_drag_on_track_moves_to_neighbour() {
        let now = Instant::now();
        let mut app = app(now);
        let track = app.layout().track;
        let row = track.y + 1;
        let start = track.x + track.width - 2;

        // Dragging left by a third of the card at double speed passes the midpoint
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row), now);
        assert!(app.carousel.is_dragging());
        app.handle_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), start - track.width / 3, row),
            now,
        );
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), start, row), now);
        assert!(!app.carousel.is_dragging());

        app.update(now + Duration::from_millis(700));
        assert_eq!(app.carousel.active_indicator(), 1);
    }

    #[test]
    fn test_click_on_dot_selects_it() {
        let now = Instant::now();
        let mut app = app(now);
        let dots = app.layout().dots;
        let column = (dots.x..dots.x + dots.width)
            .find(|c| dot_hit(dots, app.carousel.len(), *c) == Some(DotHit::Dot(3)))
            .unwrap();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, dots.y), now);
        app.update(now + Duration::from_millis(700));
        assert_eq!(app.carousel.active_indicator(), 3);
        assert_eq!(app.carousel.cursor(), 4);
    }

    #[test]
    fn test_resize_debounces_breakpoint_change() {
        let now = Instant::now();
        let mut app = app(now);

        // 100 columns at 8px per column is below the 992px breakpoint
        app.on_resize(100, 40, now);
        assert!(!app.viewport.is_mobile());
        assert_eq!(
            app.track_offset(),
            -slot_width(app.layout().track.width, 4),
            "track re-snaps immediately"
        );

        app.update(now + Duration::from_millis(100));
        assert!(!app.viewport.is_mobile());
        app.update(now + Duration::from_millis(300));
        assert!(app.viewport.is_mobile());
        assert!(app.status_message.is_some());
    }
}
