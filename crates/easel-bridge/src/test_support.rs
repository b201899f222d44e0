//! Shared fixtures for unit tests.

use crate::core::{Frame, UiCore};
use crate::ingest::{FileBytes, ReadError};
use crate::input::{Key, Modifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Resize(f32, f32, f32),
    MouseDown(f32, f32, bool),
    MouseMove(f32, f32),
    MouseUp,
    Wheel(f32, f32),
    Focus(bool),
    Modifiers(Modifiers),
    KeyDown(Key),
    KeyUp(Key),
    DragOver(Vec<String>),
    DragLeave,
    Dropped(Vec<String>, Vec<Result<FileBytes, ReadError>>),
    Draw(u64),
}

/// UI core that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingCore {
    pub calls: Vec<Call>,
    pub handle_keys: bool,
}

impl<T> UiCore<T> for RecordingCore {
    fn on_resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.calls.push(Call::Resize(width, height, pixel_ratio));
    }

    fn mouse_down(&mut self, x: f32, y: f32, is_secondary: bool) {
        self.calls.push(Call::MouseDown(x, y, is_secondary));
    }

    fn mouse_move(&mut self, x: f32, y: f32) {
        self.calls.push(Call::MouseMove(x, y));
    }

    fn mouse_up(&mut self) {
        self.calls.push(Call::MouseUp);
    }

    fn mouse_wheel(&mut self, dx: f32, dy: f32) {
        self.calls.push(Call::Wheel(dx, dy));
    }

    fn focus(&mut self, focused: bool) {
        self.calls.push(Call::Focus(focused));
    }

    fn modifiers_changed(&mut self, modifiers: Modifiers) {
        self.calls.push(Call::Modifiers(modifiers));
    }

    fn key_down(&mut self, key: &Key) -> bool {
        self.calls.push(Call::KeyDown(key.clone()));
        self.handle_keys
    }

    fn key_up(&mut self, key: &Key) -> bool {
        self.calls.push(Call::KeyUp(key.clone()));
        self.handle_keys
    }

    fn on_drag_over(&mut self, names: Vec<String>) {
        self.calls.push(Call::DragOver(names));
    }

    fn on_drag_leave(&mut self) {
        self.calls.push(Call::DragLeave);
    }

    fn on_file_dropped(&mut self, names: Vec<String>, contents: Vec<Result<FileBytes, ReadError>>) {
        self.calls.push(Call::Dropped(names, contents));
    }

    fn on_draw(&mut self, frame: &mut Frame<'_, T>) {
        self.calls.push(Call::Draw(frame.time.frame_index));
    }
}
