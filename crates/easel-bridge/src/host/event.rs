use crate::coords::Point;
use crate::input::{Modifiers, MouseButton};

/// Which element a drag event was dispatched to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Target {
    /// The surface element itself.
    Surface,
    /// Any other element in the document.
    Elsewhere,
}

impl Target {
    #[inline]
    pub fn is_surface(self) -> bool {
        self == Target::Surface
    }
}

/// Raw host events, before normalization.
///
/// Coordinates are client (viewport) pixels. File drops are not part of this
/// vocabulary because they carry unread file handles; see `Bridge::drop_files`.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Touch contact started. `touches` lists all active contacts.
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd,

    /// Mouse button pressed on the surface element.
    MouseDown { client: Point, button: MouseButton },
    /// Context-menu trigger on the surface element.
    ContextMenu { client: Point },
    /// Mouse button released anywhere in the document.
    MouseUp,
    /// Mouse moved anywhere in the document.
    MouseMove { client: Point },

    Wheel { delta_x: f32, delta_y: f32 },

    /// Surface element gained focus.
    Focus,
    /// Surface element lost focus.
    Blur,

    /// Key pressed anywhere in the document.
    KeyDown { key: String, modifiers: Modifiers },
    KeyUp { key: String, modifiers: Modifiers },

    /// A drag is in progress over `target`; `names` are the dragged file names.
    DragOver { client: Point, target: Target, names: Vec<String> },
    /// A drag left the document body.
    DragLeave,
}

/// What the host adapter must do with the native event after dispatch.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Let the host handle the event normally.
    pub const PASS: Self = Self { prevent_default: false, stop_propagation: false };

    /// Suppress default host behavior, keep propagating.
    pub const PREVENT: Self = Self { prevent_default: true, stop_propagation: false };

    /// Suppress default host behavior and stop propagation.
    pub const CONSUME: Self = Self { prevent_default: true, stop_propagation: true };
}
