use crate::ingest::{FileBytes, ReadError};
use crate::input::{Key, Modifiers};

use super::{Frame, View};

/// Consumer of normalized events and provider of draw commands.
///
/// `T` is the raster target type the surface hands to [`UiCore::on_draw`].
/// Coordinates are logical pixels, matching the size passed to `on_resize`.
pub trait UiCore<T> {
    /// Handle through which the core can request surface resizes.
    ///
    /// Called once at attach. The default handle is never read by anyone but
    /// the bridge, so no resizes are ever requested.
    fn get_view(&self) -> View {
        View::default()
    }

    /// Surface was resized to `width × height` logical pixels at `pixel_ratio`.
    fn on_resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        let _ = (width, height, pixel_ratio);
    }

    fn mouse_down(&mut self, x: f32, y: f32, is_secondary: bool) {
        let _ = (x, y, is_secondary);
    }

    fn mouse_move(&mut self, x: f32, y: f32) {
        let _ = (x, y);
    }

    fn mouse_up(&mut self) {}

    /// `dy` is positive toward content (host wheel delta inverted).
    fn mouse_wheel(&mut self, dx: f32, dy: f32) {
        let _ = (dx, dy);
    }

    fn focus(&mut self, focused: bool) {
        let _ = focused;
    }

    /// Delivered before every key event with that event's own snapshot.
    fn modifiers_changed(&mut self, modifiers: Modifiers) {
        let _ = modifiers;
    }

    /// Returns `true` when the key was handled; the host default is then suppressed.
    fn key_down(&mut self, key: &Key) -> bool {
        let _ = key;
        false
    }

    fn key_up(&mut self, key: &Key) -> bool {
        let _ = key;
        false
    }

    /// Files named `names` are being dragged over the surface.
    fn on_drag_over(&mut self, names: Vec<String>) {
        let _ = names;
    }

    fn on_drag_leave(&mut self) {}

    /// A drop completed. `names` and `contents` are parallel and in drop order;
    /// a file that failed to read carries its error in place of its bytes.
    fn on_file_dropped(&mut self, names: Vec<String>, contents: Vec<Result<FileBytes, ReadError>>) {
        let _ = (names, contents);
    }

    /// Called once per display refresh while the surface is alive.
    fn on_draw(&mut self, frame: &mut Frame<'_, T>);
}
