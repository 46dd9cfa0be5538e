// Input manager - turns window key events into action state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Routes keyboard events through the bindings into [`PlayerInput`]
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::with_defaults())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical key codes are bound
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a single key transition
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        match state {
            ElementState::Pressed if !repeat => self.player.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
    }

    /// Clear per-frame edges; call once per frame after the tick
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Check if the quit action went down this frame
    pub fn quit_requested(&self) -> bool {
        self.player.just_pressed(Action::Quit)
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::FacingDirection;

    #[test]
    fn test_bound_key_presses_action() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowRight, ElementState::Pressed, false);

        assert!(manager.player().is_pressed(Action::MoveRight));
        assert_eq!(
            manager.player().horizontal_direction(),
            FacingDirection::Right
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyQ, ElementState::Pressed, false);

        assert_eq!(manager.player().horizontal_direction(), FacingDirection::None);
        assert!(!manager.quit_requested());
    }

    #[test]
    fn test_key_repeat_does_not_press() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowUp, ElementState::Pressed, true);
        assert!(!manager.player().wants_jump());
    }

    #[test]
    fn test_release() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ShiftLeft, ElementState::Pressed, false);
        assert!(manager.player().is_sprinting());
        manager.update();

        manager.process_key(KeyCode::ShiftLeft, ElementState::Released, false);
        assert!(!manager.player().is_sprinting());
        assert!(manager.player().just_released(Action::Sprint));
    }

    #[test]
    fn test_quit_requested_is_an_edge() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Escape, ElementState::Pressed, false);
        assert!(manager.quit_requested());

        manager.update();
        assert!(!manager.quit_requested());
    }

    #[test]
    fn test_rebinding_through_config() {
        let mut manager = InputManager::new();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::Space), Action::Jump);

        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert!(manager.player().wants_jump());
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowLeft, ElementState::Pressed, false);
        manager.reset();
        assert!(!manager.player().is_pressed(Action::MoveLeft));
    }
}
