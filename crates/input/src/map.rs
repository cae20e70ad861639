//! Key mapping from terminal events to game actions.
//!
//! The same key means different things depending on what is on screen, so
//! every lookup takes the current [`InputMode`].

use crate::types::{GameAction, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action for `mode`.
pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match mode {
        InputMode::Playing => map_playing(key.code),
        InputMode::Menu => map_menu(key.code),
        InputMode::GameOver => map_game_over(key.code),
    }
}

fn map_playing(code: KeyCode) -> Option<GameAction> {
    match code {
        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Esc | KeyCode::Char('p' | 'P') => Some(GameAction::Pause),

        _ => None,
    }
}

fn map_menu(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(GameAction::MenuUp),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(GameAction::MenuDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::MenuConfirm),
        KeyCode::Esc | KeyCode::Char('p' | 'P') => Some(GameAction::Pause),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        _ => None,
    }
}

fn map_game_over(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        KeyCode::Esc => Some(GameAction::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows SIGINT, so Ctrl-C has to be handled here.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn play(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::Playing)
    }

    fn menu(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::Menu)
    }

    fn game_over(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::GameOver)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(play(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(play(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(play(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(play(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(play(KeyCode::Char('h')), Some(GameAction::MoveLeft));
        assert_eq!(play(KeyCode::Char('L')), Some(GameAction::MoveRight));
        assert_eq!(play(KeyCode::Char('j')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_and_drop_keys() {
        assert_eq!(play(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(play(KeyCode::Char('W')), Some(GameAction::Rotate));
        assert_eq!(play(KeyCode::Char(' ')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(play(KeyCode::Esc), Some(GameAction::Pause));
        assert_eq!(play(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(menu(KeyCode::Esc), Some(GameAction::Pause));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu(KeyCode::Up), Some(GameAction::MenuUp));
        assert_eq!(menu(KeyCode::Down), Some(GameAction::MenuDown));
        assert_eq!(menu(KeyCode::Enter), Some(GameAction::MenuConfirm));
        assert_eq!(menu(KeyCode::Char('r')), Some(GameAction::Restart));
        // Movement keys do nothing in the menu.
        assert_eq!(menu(KeyCode::Left), None);
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(game_over(KeyCode::Char('R')), Some(GameAction::Restart));
        assert_eq!(game_over(KeyCode::Esc), Some(GameAction::Quit));
        assert_eq!(game_over(KeyCode::Enter), None);
        assert_eq!(game_over(KeyCode::Left), None);
    }

    #[test]
    fn test_restart_key_ignored_while_playing() {
        assert_eq!(play(KeyCode::Char('r')), None);
        assert_eq!(play(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));

        for mode in [InputMode::Playing, InputMode::Menu, InputMode::GameOver] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char('q')), mode),
                Some(GameAction::Quit)
            );
        }
    }
}
