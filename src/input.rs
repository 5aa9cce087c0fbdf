use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Down,
    Up,
    Select,
    Back,
    Subjects,
    None,
}

pub fn poll_action() -> anyhow::Result<Action> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(Action::None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(Action::None),
    }
}

pub fn map_key(key: KeyEvent) -> Action {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Action::Down,
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Action::Up,
        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Esc, _) | (KeyCode::Char('b'), _) => Action::Back,
        (KeyCode::Char('s'), _) => Action::Subjects,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Char('j'))), Action::Down);
        assert_eq!(map_key(press(KeyCode::Up)), Action::Up);
        assert_eq!(map_key(press(KeyCode::Enter)), Action::Select);
        assert_eq!(map_key(press(KeyCode::Esc)), Action::Back);
        assert_eq!(map_key(press(KeyCode::Char('s'))), Action::Subjects);
        assert_eq!(map_key(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Action::Quit);
    }

    #[test]
    fn ignores_release_events() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), Action::None);
    }
}
