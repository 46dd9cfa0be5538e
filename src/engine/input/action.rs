// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    /// Held to multiply run speed
    Sprint,

    // Meta actions
    Quit,
}

/// Represents an input source (keyboard key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings: arrows to move, Up to jump, Shift to sprint
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::ShiftLeft), Action::Sprint),
        (InputSource::key(KeyCode::ShiftRight), Action::Sprint),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::ArrowLeft);
        assert_eq!(source, InputSource::Keyboard(KeyCode::ArrowLeft));
    }

    #[test]
    fn test_default_bindings_cover_movement() {
        let bindings = default_bindings();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Sprint,
            Action::Quit,
        ] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "Missing default binding for {:?}",
                action
            );
        }
    }

    #[test]
    fn test_both_shift_keys_sprint() {
        let sprint_keys = default_bindings()
            .into_iter()
            .filter(|(_, action)| *action == Action::Sprint)
            .count();
        assert_eq!(sprint_keys, 2);
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
