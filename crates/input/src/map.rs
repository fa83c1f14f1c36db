//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Front-end only commands that never reach the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendCommand {
    ToggleKeyboard,
    CycleColor,
}

/// Map keyboard input to game actions.
///
/// Every printable character is a keystroke; the shift flag comes from the
/// modifier state the terminal reports.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::F(2) => Some(GameAction::Restart),
        KeyCode::F(3) => Some(GameAction::CycleMode),
        KeyCode::F(4) => Some(GameAction::ToggleShiftMode),

        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(ch) if !ch.is_control() => Some(GameAction::Type {
            ch,
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        }),

        _ => None,
    }
}

/// Keys handled by the terminal front end itself.
pub fn frontend_command(key: KeyEvent) -> Option<FrontendCommand> {
    match key.code {
        KeyCode::F(5) => Some(FrontendCommand::CycleColor),
        KeyCode::F(6) => Some(FrontendCommand::ToggleKeyboard),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::F(10)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
