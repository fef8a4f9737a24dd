//! Infinite ground made from a fixed ring of recycled segments.

use log::debug;

use crate::game::config::TrackConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    /// Slot in the ring; stable for the life of the scroller.
    pub index: usize,
    pub z: f32,
}

pub struct TrackScroller {
    config: TrackConfig,
    segments: Vec<TrackSegment>,
}

impl TrackScroller {
    pub fn new(config: TrackConfig) -> Self {
        let segments = (0..config.segment_count)
            .map(|index| TrackSegment {
                index,
                z: -(index as f32) * config.segment_length,
            })
            .collect();
        Self { config, segments }
    }

    pub fn tick(&mut self, dt: f32) {
        let step = self.config.speed * dt;
        let reset_z = self.config.reset_z();
        for segment in &mut self.segments {
            segment.z += step;
            if segment.z > self.config.recycle_z {
                debug!("Recycling track segment {} to z={}", segment.index, reset_z);
                segment.z = reset_z;
            }
        }
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }
}
