// Character entity: kinematics driving the sprite animator

use glam::Vec2;
use log::debug;

use crate::engine::input::PlayerInput;
use crate::engine::renderer::{AtlasTextures, RenderTarget, Sprite, TextureHandle};

use super::animation::{AnimationError, AnimationSet, Animator, AnimatorConfig};
use super::state::{AnimationState, FacingDirection};
use super::stats::{MovementStats, PlayField};

/// Input sampled for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    /// Horizontal key held this tick (`None` if neither)
    pub direction: FacingDirection,
    pub sprint: bool,
    /// Jump key held this tick
    pub jump: bool,
}

impl ControlState {
    /// Snapshot the movement actions from the current input state
    pub fn from_input(input: &PlayerInput) -> Self {
        Self {
            direction: input.horizontal_direction(),
            sprint: input.is_sprinting(),
            jump: input.wants_jump(),
        }
    }
}

/// A side-view character that runs, sprints and jumps inside a play field
#[derive(Debug, Clone)]
pub struct Character {
    /// Centre of the sprite (pixels, y up)
    pub position: Vec2,
    /// Vertical velocity (pixels/second)
    pub velocity_y: f32,
    grounded: bool,

    pub stats: MovementStats,
    pub field: PlayField,
    animator: Animator,
    textures: AtlasTextures,
}

impl Character {
    /// Create a character standing at the field's spawn point
    pub fn new(
        stats: MovementStats,
        field: PlayField,
        animator: Animator,
        textures: AtlasTextures,
    ) -> Self {
        Self {
            position: field.spawn_point(),
            velocity_y: 0.0,
            grounded: true,
            stats,
            field,
            animator,
            textures,
        }
    }

    /// The owlet with its three sheets bound to texture handles 0, 1 and 2
    pub fn owlet(config: AnimatorConfig) -> Result<Self, AnimationError> {
        let animator = Animator::new(AnimationSet::owlet()?, config)?;
        let textures = AtlasTextures::new(TextureHandle(0), TextureHandle(1), TextureHandle(2));
        Ok(Self::new(
            MovementStats::standard(),
            PlayField::default(),
            animator,
            textures,
        ))
    }

    /// Run one simulation step of `dt` seconds.
    ///
    /// Movement is integrated first; the resulting state is handed to the
    /// animator before its timer advances, so a new state never inherits
    /// time accumulated under the old one.
    pub fn tick(&mut self, controls: ControlState, dt: f32) {
        let dt = dt.max(0.0);

        // Horizontal movement
        let speed = self.stats.speed(controls.sprint);
        self.position.x += controls.direction.axis() * speed * dt;
        self.position.x = self
            .field
            .clamp_x(self.position.x, self.stats.half_width());

        // Jump
        if controls.jump && self.grounded {
            self.velocity_y = self.stats.jump_speed;
            self.grounded = false;
            debug!("Jump from x={:.1}", self.position.x);
        }

        // Gravity
        self.velocity_y += self.stats.gravity * dt;
        self.position.y += self.velocity_y * dt;

        // Landing
        if self.position.y <= self.field.ground_y && self.velocity_y <= 0.0 {
            if !self.grounded {
                debug!("Landed at x={:.1}", self.position.x);
            }
            self.position.y = self.field.ground_y;
            self.velocity_y = 0.0;
            self.grounded = true;
        }

        let requested = self.requested_state(controls.direction);
        self.animator.set_state(requested, controls.direction);
        self.animator.advance(dt);
    }

    /// Animation state implied by the current motion
    fn requested_state(&self, direction: FacingDirection) -> AnimationState {
        if !self.grounded {
            AnimationState::Jumping
        } else if direction.is_some() {
            AnimationState::Running
        } else {
            AnimationState::Idle
        }
    }

    /// Describe the current frame as a sprite
    pub fn sprite(&self) -> Sprite {
        Sprite {
            position: self.position,
            size: self.stats.size(),
            uv: self.animator.current_sample_rect(),
            flip_x: self.animator.flip_x(),
            texture: self.textures.for_state(self.animator.state()),
        }
    }

    /// Submit the current frame to the render target
    pub fn render(&self, target: &mut impl RenderTarget) {
        target.draw_sprite(&self.sprite());
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn state(&self) -> AnimationState {
        self.animator.state()
    }

    pub fn facing(&self) -> FacingDirection {
        self.animator.last_direction()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }
}
