//! Key mapping from terminal events to camera actions.

use crate::types::CameraAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to camera actions.
pub fn handle_key_event(key: KeyEvent) -> Option<CameraAction> {
    match key.code {
        // Movement
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(CameraAction::MoveForward),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(CameraAction::MoveBack),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(CameraAction::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(CameraAction::MoveRight),

        // Look
        KeyCode::Char('i') | KeyCode::Char('I') => Some(CameraAction::LookUp),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(CameraAction::LookDown),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(CameraAction::LookLeft),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(CameraAction::LookRight),

        // Field of view
        KeyCode::Char('r') | KeyCode::Char('R') => Some(CameraAction::WidenFov),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(CameraAction::NarrowFov),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(CameraAction::MoveForward)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(CameraAction::MoveBack)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(CameraAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(CameraAction::MoveRight)
        );
    }

    #[test]
    fn test_look_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('i'))),
            Some(CameraAction::LookUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(CameraAction::LookDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(CameraAction::LookLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(CameraAction::LookRight)
        );
    }

    #[test]
    fn test_fov_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(CameraAction::WidenFov)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('F'))),
            Some(CameraAction::NarrowFov)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Enter)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char(' '))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
