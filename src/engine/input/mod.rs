//! Input handling module
//! Maps keyboard events to runner actions and host commands.

pub mod handler;

pub use handler::{HostCommand, InputHandler, RunnerInput};
