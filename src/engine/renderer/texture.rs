// Atlas texture handles
//
// Textures are created and owned by the graphics backend; the game only
// keeps opaque handles and picks which one to bind.

use crate::game::characters::AnimationState;

/// Handle to a texture owned by the graphics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub usize);

/// One sprite sheet per animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasTextures {
    slots: [TextureHandle; 3],
}

impl AtlasTextures {
    pub fn new(idle: TextureHandle, run: TextureHandle, jump: TextureHandle) -> Self {
        Self {
            slots: [idle, run, jump],
        }
    }

    /// The same sheet for every state
    pub fn shared(handle: TextureHandle) -> Self {
        Self::new(handle, handle, handle)
    }

    /// Sheet to bind while `state` is active
    pub fn for_state(&self, state: AnimationState) -> TextureHandle {
        // `slot()` is always below the number of states
        self.slots[state.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_state() {
        let textures = AtlasTextures::new(TextureHandle(10), TextureHandle(11), TextureHandle(12));
        assert_eq!(textures.for_state(AnimationState::Idle), TextureHandle(10));
        assert_eq!(textures.for_state(AnimationState::Running), TextureHandle(11));
        assert_eq!(textures.for_state(AnimationState::Jumping), TextureHandle(12));
    }

    #[test]
    fn test_shared() {
        let textures = AtlasTextures::shared(TextureHandle(4));
        assert_eq!(textures.for_state(AnimationState::Jumping), TextureHandle(4));
    }
}
