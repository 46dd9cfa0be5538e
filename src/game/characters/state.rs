// Character animation states and facing

/// Motion-derived mode of a character; selects the atlas and playback policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    /// Standing still on the ground
    #[default]
    Idle,
    /// Moving horizontally on the ground
    Running,
    /// In the air
    Jumping,
}

impl AnimationState {
    /// All states, in atlas slot order
    pub const ALL: [AnimationState; 3] = [Self::Idle, Self::Running, Self::Jumping];

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "run",
            Self::Jumping => "jump",
        }
    }

    /// Index of this state's atlas texture
    pub fn slot(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Running => 1,
            Self::Jumping => 2,
        }
    }
}

/// Horizontal direction sampled from input.
///
/// `None` means no horizontal key is held this tick. It is never stored as
/// a facing; the animator keeps the last non-`None` direction instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FacingDirection {
    #[default]
    None,
    Right,
    Left,
}

impl FacingDirection {
    /// Check if this is an actual direction (not the input-absence sentinel)
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Signed horizontal axis: 1 right, -1 left, 0 none
    pub fn axis(&self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}
