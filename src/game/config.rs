//! Tuning constants for the runner, grouped per component.

/// How the player's horizontal position chases the lane target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaneSmoothing {
    /// Fixed lerp factor applied once per tick, regardless of frame duration.
    PerTick(f32),
    /// Exponential decay with time constant `tau` seconds: `1 - exp(-dt / tau)`.
    TimeConstant(f32),
}

impl LaneSmoothing {
    pub fn factor(&self, dt: f32) -> f32 {
        match *self {
            LaneSmoothing::PerTick(factor) => factor,
            LaneSmoothing::TimeConstant(tau) if tau > 0.0 => 1.0 - (-dt / tau).exp(),
            // A zero time constant means "snap to target".
            LaneSmoothing::TimeConstant(_) => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub lane_width: f32,
    pub base_height: f32,
    pub jump_height: f32,
    pub jump_duration: f32,
    pub smoothing: LaneSmoothing,
    pub size: glam::Vec3,
    pub color: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            lane_width: 3.0,
            base_height: 1.0,
            jump_height: 2.5,
            jump_duration: 1.0,
            smoothing: LaneSmoothing::PerTick(0.1),
            size: glam::Vec3::new(0.5, 1.0, 0.5),
            color: 0xff69b4, // hotpink
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpawnerConfig {
    pub spawn_interval: f32,
    pub speed: f32,
    pub spawn_z: f32,
    pub retire_z: f32,
    pub lane_width: f32,
    pub palette: [u32; 5],
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 2.0,
            speed: 10.0,
            spawn_z: -50.0,
            retire_z: 20.0,
            lane_width: 3.0,
            palette: [0xe74c3c, 0x3498db, 0x2ecc71, 0xf39c12, 0x9b59b6],
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackConfig {
    pub segment_count: usize,
    pub segment_length: f32,
    pub segment_width: f32,
    pub speed: f32,
    pub recycle_z: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            segment_count: 5,
            segment_length: 20.0,
            segment_width: 10.0,
            speed: 5.0,
            recycle_z: 20.0,
        }
    }
}

impl TrackConfig {
    /// Where a recycled segment lands: the back of the ring.
    pub fn reset_z(&self) -> f32 {
        -self.segment_length * (self.segment_count as f32 - 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub spawner: SpawnerConfig,
    pub track: TrackConfig,
    /// Optional cap on a single frame's delta. `None` passes wall-clock
    /// deltas through untouched.
    pub max_frame_delta: Option<f32>,
    /// Seed for the obstacle generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            spawner: SpawnerConfig::default(),
            track: TrackConfig::default(),
            max_frame_delta: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_frame_delta(mut self, max: f32) -> Self {
        self.max_frame_delta = Some(max);
        self
    }

    /// Reads `RUNNER_SEED` from the environment, ignoring values that don't parse.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("RUNNER_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("Ignoring unparsable RUNNER_SEED={:?}", raw),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_tick_smoothing_ignores_dt() {
        let smoothing = LaneSmoothing::PerTick(0.1);
        assert_eq!(smoothing.factor(0.016), 0.1);
        assert_eq!(smoothing.factor(1.0), 0.1);
    }

    #[test]
    fn time_constant_smoothing_grows_with_dt() {
        let smoothing = LaneSmoothing::TimeConstant(0.15);
        assert_eq!(smoothing.factor(0.0), 0.0);
        assert!(smoothing.factor(0.01) < smoothing.factor(0.05));
        assert!(smoothing.factor(10.0) <= 1.0);
        assert_eq!(LaneSmoothing::TimeConstant(0.0).factor(0.01), 1.0);
    }

    #[test]
    fn track_reset_point_is_back_of_ring() {
        assert_eq!(TrackConfig::default().reset_z(), -80.0);
    }

    #[test]
    fn frame_cap_is_opt_in() {
        assert_eq!(GameConfig::default().max_frame_delta, None);
        assert_eq!(GameConfig::default().with_max_frame_delta(0.25).max_frame_delta, Some(0.25));
    }
}
