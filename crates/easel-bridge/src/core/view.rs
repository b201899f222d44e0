use std::cell::Cell;
use std::rc::Rc;

use crate::coords::Size;

/// Shared handle between the UI core and the bridge.
///
/// The core keeps a clone and calls [`View::request_resize`]; the bridge
/// applies the latest request at the start of the next frame. Only the most
/// recent request survives.
#[derive(Debug, Clone, Default)]
pub struct View {
    requested: Rc<Cell<Option<Size>>>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_resize(&self, width: f32, height: f32) {
        self.requested.set(Some(Size::new(width, height)));
    }

    /// Takes the pending request, leaving none.
    pub fn take_requested_size(&self) -> Option<Size> {
        self.requested.take()
    }
}
