use crate::coords::Point;
use crate::core::UiCore;
use crate::host::{EventResponse, HostEvent};

use super::MouseButton;

/// Which family of pointer handlers is bound for the session.
///
/// Exactly one mode is active per bridge, chosen once at attach.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerMode {
    Touch,
    Mouse,
}

impl PointerMode {
    pub fn for_host(touch_capable: bool) -> Self {
        if touch_capable {
            PointerMode::Touch
        } else {
            PointerMode::Mouse
        }
    }
}

/// Normalized pointer action, coordinates in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerAction {
    Down { position: Point, secondary: bool },
    Move { position: Point },
    Up,
    Wheel { dx: f32, dy: f32 },
}

/// Merges touch, mouse and wheel input into one pointer stream.
#[derive(Debug, Clone)]
pub struct PointerUnifier {
    mode: PointerMode,
}

impl PointerUnifier {
    pub fn new(mode: PointerMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Whether `event` belongs to a handler bound in the current mode.
    ///
    /// Wheel events are bound in both modes.
    pub fn accepts(&self, event: &HostEvent) -> bool {
        match event {
            HostEvent::TouchStart { .. } | HostEvent::TouchMove { .. } | HostEvent::TouchEnd => {
                self.mode == PointerMode::Touch
            }
            HostEvent::MouseDown { .. }
            | HostEvent::ContextMenu { .. }
            | HostEvent::MouseUp
            | HostEvent::MouseMove { .. } => self.mode == PointerMode::Mouse,
            HostEvent::Wheel { .. } => true,
            _ => false,
        }
    }

    /// Translates a raw pointer event.
    ///
    /// `to_logical` converts client coordinates into logical surface
    /// coordinates. Returns `None` when the event is not a pointer event
    /// bound in this mode; unsupported input (multi-finger moves, non-primary
    /// buttons) yields no action and lets the host proceed.
    pub fn translate<F>(&self, event: &HostEvent, to_logical: F) -> Option<(Option<PointerAction>, EventResponse)>
    where
        F: Fn(Point) -> Point,
    {
        if !self.accepts(event) {
            return None;
        }

        let translated = match event {
            HostEvent::TouchStart { touches } => {
                // Missing contact list falls back to the origin.
                let client = touches.first().copied().unwrap_or_default();
                (
                    Some(PointerAction::Down { position: to_logical(client), secondary: false }),
                    EventResponse::PASS,
                )
            }

            HostEvent::TouchMove { touches } => match touches.as_slice() {
                [single] => (
                    Some(PointerAction::Move { position: to_logical(*single) }),
                    EventResponse::PREVENT,
                ),
                _ => (None, EventResponse::PASS),
            },

            HostEvent::TouchEnd => (Some(PointerAction::Up), EventResponse::PASS),

            HostEvent::MouseDown { client, button } => match button {
                MouseButton::Primary => (
                    Some(PointerAction::Down { position: to_logical(*client), secondary: false }),
                    EventResponse::PASS,
                ),
                _ => (None, EventResponse::PASS),
            },

            HostEvent::ContextMenu { client } => (
                Some(PointerAction::Down { position: to_logical(*client), secondary: true }),
                EventResponse::PREVENT,
            ),

            HostEvent::MouseUp => (Some(PointerAction::Up), EventResponse::PASS),

            HostEvent::MouseMove { client } => (
                Some(PointerAction::Move { position: to_logical(*client) }),
                EventResponse::PASS,
            ),

            HostEvent::Wheel { delta_x, delta_y } => (
                Some(PointerAction::Wheel { dx: *delta_x, dy: -*delta_y }),
                EventResponse::CONSUME,
            ),

            _ => return None,
        };

        Some(translated)
    }
}

/// Forwards `action` to the UI core.
pub(crate) fn dispatch<T, C>(action: PointerAction, core: &mut C)
where
    C: UiCore<T> + ?Sized,
{
    log::trace!("pointer {action:?}");
    match action {
        PointerAction::Down { position, secondary } => core.mouse_down(position.x, position.y, secondary),
        PointerAction::Move { position } => core.mouse_move(position.x, position.y),
        PointerAction::Up => core.mouse_up(),
        PointerAction::Wheel { dx, dy } => core.mouse_wheel(dx, dy),
    }
}
