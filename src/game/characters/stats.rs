// Character tuning - movement constants and play-field bounds
// All distances are in pixels, times in seconds

use glam::Vec2;

/// Movement properties of a character
#[derive(Debug, Clone, PartialEq)]
pub struct MovementStats {
    /// Horizontal speed while running (pixels/second)
    pub run_speed: f32,
    /// Speed multiplier while sprint is held
    pub sprint_multiplier: f32,
    /// Upward velocity applied on jump
    pub jump_speed: f32,
    /// Vertical acceleration (negative pulls down)
    pub gravity: f32,

    // Dimensions (drawn quad and clamp margins)
    pub width: f32,
    pub height: f32,
}

/// Stats of the owlet character
pub const BASE_STATS: MovementStats = MovementStats {
    run_speed: 100.0,
    sprint_multiplier: 2.0,
    jump_speed: 300.0,
    gravity: -500.0,

    width: 64.0,
    height: 128.0,
};

impl Default for MovementStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl MovementStats {
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Horizontal speed for the given sprint state
    pub fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.run_speed * self.sprint_multiplier
        } else {
            self.run_speed
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Visible area the character moves in
#[derive(Debug, Clone, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
    /// Height of the character's centre when standing on the ground
    pub ground_y: f32,
}

/// 800x600 window with the ground line through the middle
pub const DEFAULT_FIELD: PlayField = PlayField {
    width: 800.0,
    height: 600.0,
    ground_y: 300.0,
};

impl Default for PlayField {
    fn default() -> Self {
        DEFAULT_FIELD
    }
}

impl PlayField {
    /// Clamp a centre x so a body of `half_width` stays fully visible
    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        x.clamp(half_width, (self.width - half_width).max(half_width))
    }

    /// Horizontal centre of the field
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Spawn point: centre of the field, standing on the ground
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.ground_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = MovementStats::default();
        assert_eq!(stats.run_speed, 100.0);
        assert_eq!(stats.jump_speed, 300.0);
        assert_eq!(stats.gravity, -500.0);
        assert_eq!(stats, MovementStats::standard());
    }

    #[test]
    fn test_sprint_speed() {
        let stats = MovementStats::standard();
        assert_eq!(stats.speed(false), 100.0);
        assert_eq!(stats.speed(true), 200.0);
    }

    #[test]
    fn test_clamp_x() {
        let field = PlayField::default();
        assert_eq!(field.clamp_x(0.0, 32.0), 32.0);
        assert_eq!(field.clamp_x(900.0, 32.0), 768.0);
        assert_eq!(field.clamp_x(400.0, 32.0), 400.0);
    }

    #[test]
    fn test_clamp_x_narrow_field() {
        let field = PlayField {
            width: 40.0,
            ..PlayField::default()
        };
        // Field narrower than the body pins it to the left margin
        assert_eq!(field.clamp_x(100.0, 32.0), 32.0);
    }

    #[test]
    fn test_spawn_point() {
        let field = PlayField::default();
        assert_eq!(field.spawn_point(), Vec2::new(400.0, 300.0));
    }
}
