// Rendering seam
//
// The game describes what to draw as `Sprite`s; a `RenderTarget` implemented
// by the graphics backend turns them into draw calls.

mod sprite;
pub mod texture;

pub use sprite::{Sprite, SpriteUniform};
pub use texture::{AtlasTextures, TextureHandle};

use log::trace;

/// Receives sprites to draw this frame
pub trait RenderTarget {
    /// Bind `sprite.texture`, upload `sprite.uniform()` and draw one quad
    fn draw_sprite(&mut self, sprite: &Sprite);
}

/// Render target that only logs submissions; used when no GPU backend is attached
#[derive(Debug, Default)]
pub struct LogTarget {
    draws: u64,
}

impl LogTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sprites submitted so far
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl RenderTarget for LogTarget {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.draws += 1;
        trace!(
            "draw {:?} at ({:.1}, {:.1}) uv offset {:?} size {:?} flip {}",
            sprite.texture,
            sprite.position.x,
            sprite.position.y,
            sprite.uv.offset(),
            sprite.uv.size(),
            sprite.flip_x
        );
    }
}

/// Collects submitted sprites for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub sprites: Vec<Sprite>,
}

#[cfg(test)]
impl RenderTarget for RecordingTarget {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.sprites.push(sprite.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::UvRect;
    use glam::Vec2;

    #[test]
    fn test_log_target_counts_draws() {
        let mut target = LogTarget::new();
        let sprite = Sprite {
            position: Vec2::ZERO,
            size: Vec2::ONE,
            uv: UvRect::default(),
            flip_x: 1.0,
            texture: TextureHandle(0),
        };
        target.draw_sprite(&sprite);
        target.draw_sprite(&sprite);
        assert_eq!(target.draw_count(), 2);
    }
}
