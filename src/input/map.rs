//! Key mapping from terminal events to application commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Top-level command produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Game(GameAction),
    /// Manual coach refresh (the "refresh strategy" key)
    RefreshAdvice,
    Quit,
}

/// Map keyboard input to an application command
pub fn map_key(key: KeyEvent) -> Option<AppCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(AppCommand::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(AppCommand::Game(GameAction::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(AppCommand::Game(GameAction::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(AppCommand::Game(GameAction::SoftDrop))
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(AppCommand::Game(GameAction::RotateCw))
        }
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(AppCommand::Game(GameAction::RotateCcw)),

        // Actions
        KeyCode::Char(' ') => Some(AppCommand::Game(GameAction::HardDrop)),
        KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(AppCommand::Game(GameAction::TogglePause))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(AppCommand::Game(GameAction::Reset)),

        // Coach
        KeyCode::Char('c') | KeyCode::Char('C') => Some(AppCommand::RefreshAdvice),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppCommand::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(AppCommand::Game(GameAction::MoveLeft))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(AppCommand::Game(GameAction::MoveRight))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(AppCommand::Game(GameAction::SoftDrop))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(AppCommand::Game(GameAction::MoveLeft))
        );
    }

    #[test]
    fn test_rotation_and_drop_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(AppCommand::Game(GameAction::RotateCw))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('z'))),
            Some(AppCommand::Game(GameAction::RotateCcw))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(AppCommand::Game(GameAction::HardDrop))
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(AppCommand::Game(GameAction::TogglePause))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(AppCommand::Game(GameAction::Reset))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('c'))),
            Some(AppCommand::RefreshAdvice)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), Some(AppCommand::Quit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(AppCommand::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }
}
