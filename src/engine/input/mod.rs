// Input handling system
//
// Maps keyboard events to game actions and keeps the per-frame pressed state
// the character tick reads.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Rebindable key -> action map
// - `player`: Pressed / just-pressed / just-released state
// - `manager`: Routes winit key events through the config into the player state
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Each frame: tick the character, then clear the frame edges
// character.tick(input.player(), dt);
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
