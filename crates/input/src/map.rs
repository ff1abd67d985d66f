//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command.
///
/// WASD and the arrow keys move and rotate, `R` restarts.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::left()),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::right()),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::down()),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Rotate),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::left())
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::right())
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('S'))),
            Some(Command::down())
        );
    }

    #[test]
    fn test_rotate_and_restart_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Command::Rotate)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Rotate)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(Command::Restart)
        );
        assert_eq!(command_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
