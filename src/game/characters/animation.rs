// Character animation system
//
// The animator owns the discrete animation state of one character and turns
// it into a sub-rectangle of that state's sprite sheet. Each state is bound
// to exactly one clip (layout + playback policy), resolved once per
// transition.

use glam::Vec2;
use log::debug;

use super::state::{AnimationState, FacingDirection};

/// Seconds each frame stays on screen
pub const DEFAULT_FRAME_INTERVAL: f32 = 0.15;

/// Slack allowed when checking that frames fit inside a sheet
const LAYOUT_EPSILON: f32 = 1e-3;

/// Animation configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimationError {
    #[error("{state} layout has no frames")]
    NoFrames { state: &'static str },

    #[error("{state} layout has a non-positive dimension")]
    InvalidDimension { state: &'static str },

    #[error("{state} layout frame stride {stride} is smaller than frame width {frame_width}")]
    OverlappingFrames {
        state: &'static str,
        stride: f32,
        frame_width: f32,
    },

    #[error("{state} layout needs {needed} texels across but the sheet is {sheet_width} wide")]
    FramesExceedSheet {
        state: &'static str,
        needed: f32,
        sheet_width: f32,
    },

    #[error("{state} layout needs {needed} texels down but the sheet is {sheet_height} high")]
    RowsExceedSheet {
        state: &'static str,
        needed: f32,
        sheet_height: f32,
    },

    #[error("Frame interval must be positive, got {0}")]
    InvalidFrameInterval(f32),
}

/// Geometry of one animation inside its sprite sheet (texel units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteLayout {
    /// Number of frames in the animation
    pub frame_count: usize,
    pub frame_width: f32,
    pub frame_height: f32,
    pub sheet_width: f32,
    pub sheet_height: f32,
    /// Distance between the left edges of two neighbouring frames
    pub frame_stride: f32,
    /// Row 0 faces right, row 1 faces left
    pub facing_rows: bool,
}

impl SpriteLayout {
    /// Create a single-row layout with frames packed edge to edge
    pub const fn new(
        frame_count: usize,
        frame_width: f32,
        frame_height: f32,
        sheet_width: f32,
        sheet_height: f32,
    ) -> Self {
        Self {
            frame_count,
            frame_width,
            frame_height,
            sheet_width,
            sheet_height,
            frame_stride: frame_width,
            facing_rows: false,
        }
    }

    /// Leave `gap` texels of empty space between frames
    pub fn with_gap(self, gap: f32) -> Self {
        Self {
            frame_stride: self.frame_width + gap,
            ..self
        }
    }

    /// Use a second row for left-facing frames
    pub const fn with_facing_rows(self) -> Self {
        Self {
            facing_rows: true,
            ..self
        }
    }

    /// Number of rows this layout occupies
    pub fn rows(&self) -> usize {
        if self.facing_rows {
            2
        } else {
            1
        }
    }

    /// Check that every frame of this layout lies inside the sheet
    pub fn validate(&self, state: AnimationState) -> Result<(), AnimationError> {
        let state = state.name();

        if self.frame_count == 0 {
            return Err(AnimationError::NoFrames { state });
        }

        let dims = [
            self.frame_width,
            self.frame_height,
            self.sheet_width,
            self.sheet_height,
            self.frame_stride,
        ];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(AnimationError::InvalidDimension { state });
        }

        if self.frame_stride < self.frame_width {
            return Err(AnimationError::OverlappingFrames {
                state,
                stride: self.frame_stride,
                frame_width: self.frame_width,
            });
        }

        let needed = (self.frame_count - 1) as f32 * self.frame_stride + self.frame_width;
        if needed > self.sheet_width + LAYOUT_EPSILON {
            return Err(AnimationError::FramesExceedSheet {
                state,
                needed,
                sheet_width: self.sheet_width,
            });
        }

        let needed = self.rows() as f32 * self.frame_height;
        if needed > self.sheet_height + LAYOUT_EPSILON {
            return Err(AnimationError::RowsExceedSheet {
                state,
                needed,
                sheet_height: self.sheet_height,
            });
        }

        Ok(())
    }

    /// Normalized rectangle of frame `col` in row `row`
    pub fn sample_rect(&self, col: usize, row: usize) -> UvRect {
        UvRect {
            u: (col as f32 * self.frame_stride) / self.sheet_width,
            v: (row as f32 * self.frame_height) / self.sheet_height,
            width: self.frame_width / self.sheet_width,
            height: self.frame_height / self.sheet_height,
        }
    }
}

/// Normalized texture-space rectangle selecting one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

impl UvRect {
    /// Top-left corner
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.u, self.v)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.offset() + self.size()
    }

    /// Check the rectangle lies inside [0, 1]^2
    pub fn is_normalized(&self) -> bool {
        let (min, max) = (self.offset(), self.max());
        min.x >= 0.0
            && min.y >= 0.0
            && max.x <= 1.0 + LAYOUT_EPSILON
            && max.y <= 1.0 + LAYOUT_EPSILON
    }
}

/// How frames advance while a clip is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPolicy {
    /// Frame stays at 0
    Frozen,
    /// Frames advance and wrap to 0
    Loop,
    /// Frames advance and hold on the last one
    Once,
}

/// Layout and playback policy bound to one animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    pub layout: SpriteLayout,
    pub policy: PlaybackPolicy,
}

/// Animator tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    /// Seconds per frame
    pub frame_interval: f32,
    /// Play the jump sheet once instead of holding a single pose
    pub jump_animation_advances: bool,
    /// Step as many frames as the elapsed time covers instead of at most one
    pub catch_up_frames: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            frame_interval: DEFAULT_FRAME_INTERVAL,
            jump_animation_advances: false,
            catch_up_frames: false,
        }
    }
}

impl AnimatorConfig {
    pub fn with_frame_interval(mut self, seconds: f32) -> Self {
        self.frame_interval = seconds;
        self
    }

    pub fn with_jump_animation(mut self, advances: bool) -> Self {
        self.jump_animation_advances = advances;
        self
    }

    pub fn with_catch_up(mut self, catch_up: bool) -> Self {
        self.catch_up_frames = catch_up;
        self
    }

    fn validate(&self) -> Result<(), AnimationError> {
        if !self.frame_interval.is_finite() || self.frame_interval <= 0.0 {
            return Err(AnimationError::InvalidFrameInterval(self.frame_interval));
        }
        Ok(())
    }
}

/// One validated layout per animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSet {
    idle: SpriteLayout,
    run: SpriteLayout,
    jump: SpriteLayout,
}

impl AnimationSet {
    /// Create a set from per-state layouts, validating each
    pub fn new(
        idle: SpriteLayout,
        run: SpriteLayout,
        jump: SpriteLayout,
    ) -> Result<Self, AnimationError> {
        idle.validate(AnimationState::Idle)?;
        run.validate(AnimationState::Running)?;
        jump.validate(AnimationState::Jumping)?;
        Ok(Self { idle, run, jump })
    }

    /// Use the same sheet for every state
    pub fn uniform(layout: SpriteLayout) -> Result<Self, AnimationError> {
        Self::new(layout, layout, layout)
    }

    /// The owlet sheets: a 4-frame idle strip, 6-frame run and 8-frame jump
    pub fn owlet() -> Result<Self, AnimationError> {
        Self::new(
            SpriteLayout::new(4, 64.0, 128.0, 256.0, 256.0),
            SpriteLayout::new(6, 128.0, 128.0, 768.0, 128.0),
            SpriteLayout::new(8, 128.0, 128.0, 1024.0, 128.0),
        )
    }

    /// A single two-row sheet: 4 frames with 60 texel gaps, right row then left row
    pub fn classic_sheet() -> Result<Self, AnimationError> {
        Self::uniform(
            SpriteLayout::new(4, 64.0, 128.0, 436.0, 256.0)
                .with_gap(60.0)
                .with_facing_rows(),
        )
    }

    pub fn layout(&self, state: AnimationState) -> &SpriteLayout {
        match state {
            AnimationState::Idle => &self.idle,
            AnimationState::Running => &self.run,
            AnimationState::Jumping => &self.jump,
        }
    }

    /// Resolve the clip for a state under the given config
    pub fn clip(&self, state: AnimationState, config: &AnimatorConfig) -> AnimationClip {
        let policy = match state {
            AnimationState::Idle => PlaybackPolicy::Frozen,
            AnimationState::Running => PlaybackPolicy::Loop,
            AnimationState::Jumping if config.jump_animation_advances => PlaybackPolicy::Once,
            AnimationState::Jumping => PlaybackPolicy::Frozen,
        };
        AnimationClip {
            layout: *self.layout(state),
            policy,
        }
    }
}

/// Finite-state sprite animator for one character.
///
/// Driven once per tick with [`Animator::set_state`] followed by
/// [`Animator::advance`]; the render step reads [`Animator::current_sample_rect`].
///
/// Known limitation: outside catch-up mode at most one frame is stepped per
/// `advance` call, so very long ticks slow the animation down rather than
/// skipping frames. `frame_timer` stays below the interval only while ticks
/// are shorter than one interval.
#[derive(Debug, Clone)]
pub struct Animator {
    set: AnimationSet,
    config: AnimatorConfig,
    current_state: AnimationState,
    last_direction: FacingDirection,
    current_frame: usize,
    frame_timer: f32,
    clip: AnimationClip,
    looping: bool,
}

impl Animator {
    /// Create an animator idling and facing right
    pub fn new(set: AnimationSet, config: AnimatorConfig) -> Result<Self, AnimationError> {
        config.validate()?;
        let clip = set.clip(AnimationState::Idle, &config);
        Ok(Self {
            set,
            config,
            current_state: AnimationState::Idle,
            last_direction: FacingDirection::Right,
            current_frame: 0,
            frame_timer: 0.0,
            clip,
            looping: false,
        })
    }

    /// Request a state for this tick.
    ///
    /// Does nothing when both the state and the direction are unchanged.
    /// Otherwise the clip for `state` is bound and playback restarts at
    /// frame 0. `FacingDirection::None` never overwrites the stored facing,
    /// and since the stored facing is never `None` such a call always
    /// restarts playback.
    pub fn set_state(&mut self, state: AnimationState, input: FacingDirection) {
        if self.current_state == state && input == self.last_direction {
            return;
        }

        if self.current_state != state {
            debug!(
                "Animation {} -> {} (facing {:?})",
                self.current_state.name(),
                state.name(),
                if input.is_some() { input } else { self.last_direction }
            );
        }

        self.current_state = state;
        self.clip = self.set.clip(state, &self.config);

        if input.is_some() {
            self.last_direction = input;
        }

        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.looping = state == AnimationState::Running;
    }

    /// Advance playback by `dt` seconds (negative values count as zero)
    pub fn advance(&mut self, dt: f32) {
        if self.clip.policy == PlaybackPolicy::Frozen {
            return;
        }

        let interval = self.config.frame_interval;
        self.frame_timer += dt.max(0.0);
        if self.frame_timer < interval {
            return;
        }

        if self.config.catch_up_frames {
            // Repeated subtraction stalls on large f32 timers
            let steps = (self.frame_timer / interval).floor();
            self.frame_timer = if self.frame_timer.is_finite() {
                self.frame_timer.rem_euclid(interval)
            } else {
                0.0
            };
            // `as` saturates, so an infinite step count becomes usize::MAX
            self.step_frames(steps as usize);
        } else {
            self.frame_timer -= interval;
            self.step_frames(1);
        }
    }

    fn step_frames(&mut self, steps: usize) {
        let count = self.clip.layout.frame_count;
        match self.clip.policy {
            PlaybackPolicy::Frozen => {}
            PlaybackPolicy::Loop => {
                self.current_frame = (self.current_frame + steps % count) % count;
            }
            PlaybackPolicy::Once => {
                self.current_frame = self.current_frame.saturating_add(steps).min(count - 1);
            }
        }
    }

    /// Normalized atlas rectangle for the current frame and facing
    pub fn current_sample_rect(&self) -> UvRect {
        let layout = &self.clip.layout;
        let row = if layout.facing_rows && self.last_direction == FacingDirection::Left {
            1
        } else {
            0
        };
        layout.sample_rect(self.current_frame, row)
    }

    pub fn state(&self) -> AnimationState {
        self.current_state
    }

    /// Last non-`None` facing
    pub fn last_direction(&self) -> FacingDirection {
        self.last_direction
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_timer(&self) -> f32 {
        self.frame_timer
    }

    /// Layout bound to the current state
    pub fn layout(&self) -> &SpriteLayout {
        &self.clip.layout
    }

    pub fn policy(&self) -> PlaybackPolicy {
        self.clip.policy
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Check if a play-once clip is holding its last frame
    pub fn is_finished(&self) -> bool {
        self.clip.policy == PlaybackPolicy::Once
            && self.current_frame + 1 == self.clip.layout.frame_count
    }

    /// Horizontal mirror factor for the quad: 1 facing right, -1 facing left.
    ///
    /// Layouts with facing rows already hold mirrored frames and never flip.
    pub fn flip_x(&self) -> f32 {
        if !self.clip.layout.facing_rows && self.last_direction == FacingDirection::Left {
            -1.0
        } else {
            1.0
        }
    }
}
