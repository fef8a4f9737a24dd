//! Host-side bookkeeping: frame timing, FPS counter, window mode.

use std::time::Instant;

use log::info;

pub struct GameState {
    pub show_fps: bool,
    pub last_fps_print: Instant,
    pub frame_count: u32,
    pub fullscreen: bool,
    last_frame: Option<Instant>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            show_fps: false,
            last_fps_print: Instant::now(),
            frame_count: 0,
            fullscreen: false,
            last_frame: None,
        }
    }

    /// Seconds since the previous call; zero on the first frame.
    pub fn frame_delta(&mut self) -> f32 {
        self.frame_delta_at(Instant::now())
    }

    fn frame_delta_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame = Some(now);
        dt
    }

    pub fn update_frame_count(&mut self) {
        self.frame_count += 1;
    }

    pub fn update_fps_display(&mut self) -> Option<u32> {
        if !self.show_fps {
            return None;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_print);

        if elapsed.as_secs_f32() >= 1.0 {
            let fps = self.frame_count;
            self.frame_count = 0;
            self.last_fps_print = now;
            Some(fps)
        } else {
            None
        }
    }

    pub fn toggle_fps_display(&mut self) {
        self.show_fps = !self.show_fps;
        self.frame_count = 0;
        self.last_fps_print = Instant::now();
        info!("Show FPS: {}", self.show_fps);
    }
}
