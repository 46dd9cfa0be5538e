// Character system
//
// This module contains everything related to the playable character:
// - Animation states and facing
// - Sprite animator (state machine, frame timer, atlas sampling)
// - Movement tuning
// - Kinematics driver that feeds the animator each tick

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{
    AnimationClip, AnimationError, AnimationSet, Animator, AnimatorConfig, PlaybackPolicy,
    SpriteLayout, UvRect,
};
pub use character::{Character, ControlState};
pub use state::{AnimationState, FacingDirection};
pub use stats::{MovementStats, PlayField};
