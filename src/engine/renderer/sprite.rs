// Sprite draw description and its shader uniform block

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use super::TextureHandle;
use crate::game::characters::UvRect;

/// A textured quad sampling one frame of an atlas
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Centre position in world space (pixels)
    pub position: Vec2,
    /// Quad size in pixels (width, height)
    pub size: Vec2,
    /// Atlas region to sample
    pub uv: UvRect,
    /// 1.0 draws as authored, -1.0 mirrors horizontally
    pub flip_x: f32,
    /// Atlas to bind
    pub texture: TextureHandle,
}

impl Sprite {
    /// Model matrix translating the unit quad to this sprite's position and size
    pub fn transform_matrix(&self) -> Mat4 {
        let translation = Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0));
        let scale = Mat4::from_scale(Vec3::new(self.size.x, self.size.y, 1.0));
        translation * scale
    }

    /// Pack the per-draw uniforms
    pub fn uniform(&self) -> SpriteUniform {
        SpriteUniform {
            model: self.transform_matrix().to_cols_array_2d(),
            uv_offset: self.uv.offset().to_array(),
            uv_size: self.uv.size().to_array(),
            flip_x: self.flip_x,
            _padding: [0.0; 3],
        }
    }
}

/// Per-draw uniform block (`model`, `uOffset`, `uSize`, `flipX`)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SpriteUniform {
    pub model: [[f32; 4]; 4],
    pub uv_offset: [f32; 2],
    pub uv_size: [f32; 2],
    pub flip_x: f32,
    _padding: [f32; 3],
}
