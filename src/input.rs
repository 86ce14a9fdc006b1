//! Keyboard input adapter
//!
//! Translates key transitions into paddle velocities, pause toggles and close
//! requests. Velocities are assigned, not accumulated: the most recent press or
//! release of either movement key decides the paddle's speed. Releasing one key
//! while the other is still held stops the paddle.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::{GameState, Side};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    /// Move a paddle toward the top of the court
    Up(Side),
    /// Move a paddle toward the bottom of the court
    Down(Side),
    Pause,
    Quit,
}

impl GameKey {
    /// W/S drive the left paddle, arrow keys the right one
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(GameKey::Up(Side::Left)),
            KeyCode::KeyS => Some(GameKey::Down(Side::Left)),
            KeyCode::ArrowUp => Some(GameKey::Up(Side::Right)),
            KeyCode::ArrowDown => Some(GameKey::Down(Side::Right)),
            KeyCode::Space => Some(GameKey::Pause),
            KeyCode::Escape => Some(GameKey::Quit),
            _ => None,
        }
    }
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
}

impl From<ElementState> for KeyAction {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => KeyAction::Press,
            ElementState::Released => KeyAction::Release,
        }
    }
}

/// What the event loop should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Close,
}

/// Apply one key transition to the game state
pub fn handle_key(state: &mut GameState, key: GameKey, action: KeyAction) -> Control {
    let speed = state.tuning.paddle_speed;
    match (key, action) {
        (GameKey::Up(side), KeyAction::Press) => state.set_paddle_speed(side, -speed),
        (GameKey::Down(side), KeyAction::Press) => state.set_paddle_speed(side, speed),
        (GameKey::Up(side) | GameKey::Down(side), KeyAction::Release) => {
            state.set_paddle_speed(side, 0.0)
        }
        (GameKey::Pause, KeyAction::Press) => {
            if state.toggle_pause() {
                log::info!("Paused");
            } else {
                log::info!("Resumed");
            }
        }
        (GameKey::Quit, KeyAction::Press) => {
            log::info!("Close requested");
            return Control::Close;
        }
        (GameKey::Pause | GameKey::Quit, KeyAction::Release) => {}
    }
    Control::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed(state: &GameState, side: Side) -> f32 {
        state.paddles[side].vertical_speed()
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            GameKey::from_key_code(KeyCode::KeyW),
            Some(GameKey::Up(Side::Left))
        );
        assert_eq!(
            GameKey::from_key_code(KeyCode::ArrowDown),
            Some(GameKey::Down(Side::Right))
        );
        assert_eq!(GameKey::from_key_code(KeyCode::Space), Some(GameKey::Pause));
        assert_eq!(GameKey::from_key_code(KeyCode::Escape), Some(GameKey::Quit));
        assert_eq!(GameKey::from_key_code(KeyCode::KeyA), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut state = GameState::new(1);
        handle_key(&mut state, GameKey::Up(Side::Left), KeyAction::Press);
        assert_eq!(speed(&state, Side::Left), -200.0);
        assert_eq!(speed(&state, Side::Right), 0.0);

        handle_key(&mut state, GameKey::Up(Side::Left), KeyAction::Release);
        assert_eq!(speed(&state, Side::Left), 0.0);

        handle_key(&mut state, GameKey::Down(Side::Right), KeyAction::Press);
        assert_eq!(speed(&state, Side::Right), 200.0);
    }

    #[test]
    fn test_last_key_wins() {
        let mut state = GameState::new(1);
        handle_key(&mut state, GameKey::Up(Side::Right), KeyAction::Press);
        handle_key(&mut state, GameKey::Down(Side::Right), KeyAction::Press);
        assert_eq!(speed(&state, Side::Right), 200.0, "overwrites, not additive");

        // Releasing the first key stops the paddle even though Down is held
        handle_key(&mut state, GameKey::Up(Side::Right), KeyAction::Release);
        assert_eq!(speed(&state, Side::Right), 0.0);
    }

    #[test]
    fn test_pause_toggles_on_press_only() {
        let mut state = GameState::new(1);
        assert!(state.paused);
        assert_eq!(
            handle_key(&mut state, GameKey::Pause, KeyAction::Press),
            Control::Continue
        );
        assert!(!state.paused);
        handle_key(&mut state, GameKey::Pause, KeyAction::Release);
        assert!(!state.paused);
        handle_key(&mut state, GameKey::Pause, KeyAction::Press);
        assert!(state.paused);
    }

    #[test]
    fn test_quit_requests_close() {
        let mut state = GameState::new(1);
        assert_eq!(
            handle_key(&mut state, GameKey::Quit, KeyAction::Press),
            Control::Close
        );
        assert_eq!(
            handle_key(&mut state, GameKey::Quit, KeyAction::Release),
            Control::Continue
        );
    }

    #[test]
    fn test_input_applies_while_paused() {
        let mut state = GameState::new(1);
        handle_key(&mut state, GameKey::Down(Side::Left), KeyAction::Press);
        assert!(state.paused);
        assert_eq!(speed(&state, Side::Left), 200.0);
    }
}
