/// One of the three tracks a runner or obstacle can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(self) -> i32 {
        match self {
            Lane::Left => -1,
            Lane::Center => 0,
            Lane::Right => 1,
        }
    }

    pub fn from_index(index: i32) -> Option<Lane> {
        match index {
            -1 => Some(Lane::Left),
            0 => Some(Lane::Center),
            1 => Some(Lane::Right),
            _ => None,
        }
    }

    /// World x-offset of the lane centre.
    pub fn x_offset(self, lane_width: f32) -> f32 {
        self.index() as f32 * lane_width
    }

    /// Neighbouring lane in direction `step`. Only single-lane steps are
    /// accepted; anything else, or stepping off the edge, yields `None`.
    pub fn shifted(self, step: i32) -> Option<Lane> {
        if step.abs() != 1 {
            return None;
        }
        Lane::from_index(self.index() + step)
    }

    pub fn left(self) -> Option<Lane> {
        self.shifted(-1)
    }

    pub fn right(self) -> Option<Lane> {
        self.shifted(1)
    }
}
