use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Action),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => steer(Direction::Up),
            KeyCode::Down => steer(Direction::Down),
            KeyCode::Left => steer(Direction::Left),
            KeyCode::Right => steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => steer(Direction::Right),

            // Controls
            KeyCode::Char(' ') => KeyAction::Game(Action::Toggle),
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(Action::Restart),
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::Game(Action::ToggleMute),
            KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Game(Action::Faster),
            KeyCode::Char('-') | KeyCode::Char('_') => KeyAction::Game(Action::Slower),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

fn steer(direction: Direction) -> KeyAction {
    KeyAction::Game(Action::Steer(direction))
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Up)), steer(Direction::Up));
        assert_eq!(handler.handle_key_event(press(KeyCode::Down)), steer(Direction::Down));
        assert_eq!(handler.handle_key_event(press(KeyCode::Left)), steer(Direction::Left));
        assert_eq!(handler.handle_key_event(press(KeyCode::Right)), steer(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('w'))), steer(Direction::Up));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('a'))), steer(Direction::Left));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('s'))), steer(Direction::Down));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('d'))), steer(Direction::Right));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), steer(Direction::Up));
    }

    #[test]
    fn test_session_controls() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            KeyAction::Game(Action::Toggle)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Game(Action::Restart)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('M'))),
            KeyAction::Game(Action::ToggleMute)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('+'))),
            KeyAction::Game(Action::Faster)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('-'))),
            KeyAction::Game(Action::Slower)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
