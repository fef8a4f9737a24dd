//! Window creation and event filtering.

pub mod manager;

pub use manager::{HostEvent, KeyEvent, WindowManager};
