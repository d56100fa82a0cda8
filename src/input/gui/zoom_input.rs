use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Pointer and keyboard state that steers the zoom between frames.
///
/// Holding the primary button switches to full-resolution sampling; `R`
/// requests a restart, consumed once by the next frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZoomInputState {
    pointer_held: bool,
    reset_pending: bool,
}

impl ZoomInputState {
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.pointer_held = state == ElementState::Pressed;
        }
    }

    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        if key_code == KeyCode::KeyR && state == ElementState::Pressed {
            self.reset_pending = true;
        }
    }

    #[must_use]
    pub fn high_resolution(&self) -> bool {
        self.pointer_held
    }

    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pending)
    }
}
