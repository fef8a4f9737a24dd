pub mod track;

pub use track::{TrackScroller, TrackSegment};
