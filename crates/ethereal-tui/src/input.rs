use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SkipPreloader,
    // Carousel
    Next,
    Previous,
    SelectIndicator(usize),
    // Focus
    FocusForm,
    FocusCarousel,
    // Navigation menu
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuChoose,
    // Contact form
    NextField,
    PrevField,
    InputChar(char),
    Backspace,
    Submit,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    // Any key skips the intro
    if app.is_preloading() {
        return Action::SkipPreloader;
    }

    if app.menu.is_open() {
        return handle_menu_mode(key);
    }

    match app.focus {
        Focus::Form(_) => handle_form_mode(key),
        Focus::Carousel => handle_carousel_mode(key),
    }
}

fn handle_carousel_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Right, KeyModifiers::NONE) => Action::Next,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Left, KeyModifiers::NONE) => Action::Previous,

        // Dots are numbered from 1 on screen
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SelectIndicator(c as usize - '1' as usize)
        }

        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusForm,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::FocusForm,

        _ => Action::None,
    }
}

fn handle_menu_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Enter => Action::MenuChoose,
        KeyCode::Char('m') | KeyCode::Esc => Action::ToggleMenu,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

/// Handle key events while typing into the contact form
fn handle_form_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::FocusCarousel,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_carousel_keys() {
        assert_eq!(handle_carousel_mode(key(KeyCode::Right)), Action::Next);
        assert_eq!(handle_carousel_mode(key(KeyCode::Char('h'))), Action::Previous);
        assert_eq!(
            handle_carousel_mode(key(KeyCode::Char('3'))),
            Action::SelectIndicator(2)
        );
        assert_eq!(handle_carousel_mode(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_form_keys_capture_text() {
        assert_eq!(handle_form_mode(key(KeyCode::Char('q'))), Action::InputChar('q'));
        assert_eq!(handle_form_mode(key(KeyCode::Esc)), Action::FocusCarousel);
        assert_eq!(handle_form_mode(key(KeyCode::Enter)), Action::Submit);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(handle_menu_mode(key(KeyCode::Down)), Action::MenuDown);
        assert_eq!(handle_menu_mode(key(KeyCode::Esc)), Action::ToggleMenu);
    }
}
