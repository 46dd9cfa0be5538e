//! Frame timing
//!
//! One simulation tick runs per rendered frame. The clock measures the
//! wall-clock time between frames with a monotonic `Instant`, so the
//! delta handed to the tick is never negative.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame clock state
pub struct GameLoop {
    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,

    /// Delta handed out by the last `begin_frame`
    delta_time: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            last_frame_time: now,
            paused: false,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
            delta_time: 0.0,
        }
    }

    /// Begin a new frame, returns the seconds to simulate this tick
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    fn begin_frame_at(&mut self, now: Instant) -> f32 {
        // An earlier `now` yields a zero delta
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.delta_time = if self.paused {
            0.0
        } else {
            frame_time.as_secs_f32()
        };
        self.delta_time
    }

    /// Seconds handed out by the last `begin_frame`
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.delta_time(), 0.0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_delta_between_frames() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);

        let dt = game_loop.begin_frame_at(start + Duration::from_millis(16));
        assert_relative_eq!(dt, 0.016, epsilon = 1e-6);

        let dt = game_loop.begin_frame_at(start + Duration::from_millis(66));
        assert_relative_eq!(dt, 0.05, epsilon = 1e-6);
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_delta_never_negative() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut game_loop = GameLoop::starting_at(start);

        let dt = game_loop.begin_frame_at(start - Duration::from_millis(5));
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn test_paused_returns_zero_delta() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        game_loop.pause();

        let dt = game_loop.begin_frame_at(start + Duration::from_millis(50));
        assert_eq!(dt, 0.0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_resume_does_not_replay_paused_time() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        game_loop.pause();
        game_loop.begin_frame_at(start + Duration::from_secs(2));
        game_loop.resume();

        let dt = game_loop.begin_frame_at(start + Duration::from_millis(2010));
        assert_relative_eq!(dt, 0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_fps_tracking() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        for i in 1..=10 {
            game_loop.begin_frame_at(start + Duration::from_millis(20 * i));
        }
        assert_relative_eq!(game_loop.fps(), 50.0, epsilon = 0.01);
    }
}
