use crossbeam_channel::Sender;
use log::{debug, warn};
use winit::keyboard::KeyCode;
use winit::window::{Fullscreen, Window};

/// Discrete runner actions. Everything else on the keyboard is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    MoveLeft,
    MoveRight,
    Jump,
}

impl RunnerInput {
    pub fn from_key(keycode: KeyCode) -> Option<Self> {
        use KeyCode::*;
        match keycode {
            ArrowLeft | KeyA => Some(RunnerInput::MoveLeft),
            ArrowRight | KeyD => Some(RunnerInput::MoveRight),
            ArrowUp | Space | KeyW => Some(RunnerInput::Jump),
            _ => None,
        }
    }
}

/// Keys meant for the host window rather than the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    ToggleFps,
    ToggleFullscreen,
    Exit,
}

impl HostCommand {
    pub fn from_key(keycode: KeyCode) -> Option<Self> {
        match keycode {
            KeyCode::F3 => Some(HostCommand::ToggleFps),
            KeyCode::F11 => Some(HostCommand::ToggleFullscreen),
            KeyCode::Escape => Some(HostCommand::Exit),
            _ => None,
        }
    }
}

/// Turns key-down events into queued runner inputs. The queue is drained by
/// the simulation at the start of its next tick.
pub struct InputHandler {
    sender: Sender<RunnerInput>,
}

impl InputHandler {
    pub fn new(sender: Sender<RunnerInput>) -> Self {
        Self { sender }
    }

    /// Handles one keyboard event. Releases and OS auto-repeats are dropped,
    /// so holding a key moves one lane, not several.
    pub fn handle_keyboard_input_event(
        &mut self,
        keycode: KeyCode,
        pressed: bool,
        repeat: bool,
    ) -> Option<HostCommand> {
        if !pressed || repeat {
            return None;
        }
        if let Some(command) = HostCommand::from_key(keycode) {
            return Some(command);
        }
        if let Some(input) = RunnerInput::from_key(keycode) {
            debug!("Queued input {:?}", input);
            if self.sender.send(input).is_err() {
                warn!("Input queue closed, dropping {:?}", input);
            }
        }
        None
    }

    pub fn handle_fullscreen_toggle(&mut self, fullscreen: &mut bool, window: Option<&Window>) {
        if let Some(window) = window {
            if *fullscreen {
                window.set_fullscreen(None);
                debug!("Exited fullscreen mode");
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                debug!("Entered fullscreen mode");
            }
            *fullscreen = !*fullscreen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn key_mapping() {
        assert_eq!(RunnerInput::from_key(KeyCode::ArrowLeft), Some(RunnerInput::MoveLeft));
        assert_eq!(RunnerInput::from_key(KeyCode::KeyD), Some(RunnerInput::MoveRight));
        assert_eq!(RunnerInput::from_key(KeyCode::Space), Some(RunnerInput::Jump));
        assert_eq!(RunnerInput::from_key(KeyCode::KeyQ), None);
        assert_eq!(HostCommand::from_key(KeyCode::F11), Some(HostCommand::ToggleFullscreen));
    }

    #[test]
    fn presses_are_queued_repeats_and_releases_are_not() {
        let (tx, rx) = unbounded();
        let mut handler = InputHandler::new(tx);

        handler.handle_keyboard_input_event(KeyCode::ArrowLeft, true, false);
        handler.handle_keyboard_input_event(KeyCode::ArrowLeft, true, true);
        handler.handle_keyboard_input_event(KeyCode::ArrowLeft, false, false);
        handler.handle_keyboard_input_event(KeyCode::KeyZ, true, false);
        handler.handle_keyboard_input_event(KeyCode::ArrowUp, true, false);

        let queued: Vec<_> = rx.try_iter().collect();
        assert_eq!(queued, vec![RunnerInput::MoveLeft, RunnerInput::Jump]);
    }

    #[test]
    fn host_keys_are_not_queued() {
        let (tx, rx) = unbounded();
        let mut handler = InputHandler::new(tx);
        assert_eq!(
            handler.handle_keyboard_input_event(KeyCode::Escape, true, false),
            Some(HostCommand::Exit)
        );
        assert!(rx.try_recv().is_err());
    }
}
