// Per-frame input state for the controlled character

use super::action::Action;
use crate::game::characters::FacingDirection;
use std::collections::HashSet;

/// Pressed/released state of every action for the current frame
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear per-frame edges; call once per frame after the tick has read input
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Horizontal direction held this frame; right wins when both are held
    pub fn horizontal_direction(&self) -> FacingDirection {
        if self.is_pressed(Action::MoveRight) {
            FacingDirection::Right
        } else if self.is_pressed(Action::MoveLeft) {
            FacingDirection::Left
        } else {
            FacingDirection::None
        }
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_pressed(Action::Sprint)
    }

    pub fn wants_jump(&self) -> bool {
        self.is_pressed(Action::Jump)
    }
}
