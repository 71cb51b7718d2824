//! Input module - keyboard mapping to game intents.
//!
//! The core only ever sees [`GameIntent`] values, so the polling mechanism
//! (crossterm here) stays swappable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameIntent;

/// Map keyboard input to a game intent.
pub fn map_key(key: KeyEvent) -> Option<GameIntent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameIntent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameIntent::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameIntent::MoveDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameIntent::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameIntent::MoveRight)
        }

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameIntent::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(GameIntent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameIntent::Quit),

        _ => None,
    }
}
