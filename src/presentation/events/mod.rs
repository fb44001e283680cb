//! Terminal input classification.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Key predicates shared by the screens.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key always quits, even during text entry.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a quit event outside text entry.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        Self::is_force_quit_event(key)
            || matches!(
                key,
                KeyEvent {
                    code: KeyCode::Char('q') | KeyCode::Esc,
                    modifiers: KeyModifiers::NONE,
                    ..
                }
            )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key moves focus to the next panel.
    #[must_use]
    pub fn is_focus_next_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Checks if key moves focus to the previous panel.
    #[must_use]
    pub fn is_focus_previous_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::BackTab
            || (key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT))
    }

    /// Key releases and repeats reported by some terminals are ignored.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_force_quit_only_ctrl_c() {
        assert!(EventHandler::is_force_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_force_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_non_quit_events() {
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_focus_events() {
        let tab = make_key_event(KeyCode::Tab, KeyModifiers::NONE);
        let back_tab = make_key_event(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(EventHandler::is_focus_next_event(&tab));
        assert!(!EventHandler::is_focus_previous_event(&tab));
        assert!(EventHandler::is_focus_previous_event(&back_tab));
        assert!(!EventHandler::is_focus_next_event(&back_tab));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
