use crate::core::UiCore;
use crate::host::{EventResponse, HostEvent};

use super::{Key, Modifiers};

/// Tracks surface focus and gates keyboard delivery on it.
///
/// Key events are global in the host; they reach the UI core only while the
/// surface element is the host's focused element. Ignored events are dropped,
/// not queued.
#[derive(Debug, Default, Clone)]
pub struct KeyboardTracker {
    focused: bool,
    modifiers: Modifiers,
}

impl KeyboardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last focus state delivered to the core.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Last modifier snapshot delivered to the core.
    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Handles focus and key events; returns `None` for anything else.
    ///
    /// `element_focused` is the host's answer to "is the surface the active
    /// element" at the time of the event.
    pub fn handle<T, C>(&mut self, event: &HostEvent, element_focused: bool, core: &mut C) -> Option<EventResponse>
    where
        C: UiCore<T> + ?Sized,
    {
        let response = match event {
            HostEvent::Focus => {
                self.set_focus(true, core);
                EventResponse::PASS
            }
            HostEvent::Blur => {
                self.set_focus(false, core);
                EventResponse::PASS
            }
            HostEvent::KeyDown { key, modifiers } => {
                self.key(key, *modifiers, true, element_focused, core)
            }
            HostEvent::KeyUp { key, modifiers } => {
                self.key(key, *modifiers, false, element_focused, core)
            }
            _ => return None,
        };
        Some(response)
    }

    fn set_focus<T, C>(&mut self, focused: bool, core: &mut C)
    where
        C: UiCore<T> + ?Sized,
    {
        log::trace!("surface focus: {focused}");
        self.focused = focused;
        core.focus(focused);
    }

    fn key<T, C>(
        &mut self,
        raw: &str,
        modifiers: Modifiers,
        pressed: bool,
        element_focused: bool,
        core: &mut C,
    ) -> EventResponse
    where
        C: UiCore<T> + ?Sized,
    {
        if !element_focused {
            return EventResponse::PASS;
        }

        let key = Key::from_host(raw);

        // Modifiers always precede the key event that carries them.
        self.modifiers = modifiers;
        core.modifiers_changed(modifiers);

        let handled = if pressed { core.key_down(&key) } else { core.key_up(&key) };
        log::trace!("key {} {key}: handled={handled}", if pressed { "down" } else { "up" });

        if handled {
            EventResponse::CONSUME
        } else {
            EventResponse::PASS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NamedKey;
    use crate::test_support::{Call, RecordingCore};

    fn key_down(key: &str, modifiers: Modifiers) -> HostEvent {
        HostEvent::KeyDown { key: key.to_string(), modifiers }
    }

    fn key_up(key: &str) -> HostEvent {
        HostEvent::KeyUp { key: key.to_string(), modifiers: Modifiers::default() }
    }

    #[test]
    fn focus_transitions_are_forwarded() {
        let mut tracker = KeyboardTracker::new();
        let mut core = RecordingCore::default();

        tracker.handle::<(), _>(&HostEvent::Focus, true, &mut core);
        assert!(tracker.has_focus());
        tracker.handle::<(), _>(&HostEvent::Blur, false, &mut core);
        assert!(!tracker.has_focus());

        assert_eq!(core.calls, vec![Call::Focus(true), Call::Focus(false)]);
    }

    #[test]
    fn keys_are_ignored_while_unfocused() {
        let mut tracker = KeyboardTracker::new();
        let mut core = RecordingCore::default();

        let shift = Modifiers { shift: true, ..Default::default() };
        let response = tracker.handle::<(), _>(&key_down("a", shift), false, &mut core);
        tracker.handle::<(), _>(&key_up("a"), false, &mut core);

        assert_eq!(response, Some(EventResponse::PASS));
        assert!(core.calls.is_empty());
        assert_eq!(tracker.modifiers(), Modifiers::default());
    }

    #[test]
    fn modifiers_precede_key() {
        let mut tracker = KeyboardTracker::new();
        let mut core = RecordingCore::default();

        let mods = Modifiers { meta: true, alt: true, ..Default::default() };
        tracker.handle::<(), _>(&key_down("Enter", mods), true, &mut core);

        assert_eq!(
            core.calls,
            vec![Call::Modifiers(mods), Call::KeyDown(Key::Named(NamedKey::Enter))]
        );
        assert_eq!(tracker.modifiers(), mods);
    }

    #[test]
    fn handled_key_is_consumed() {
        let mut tracker = KeyboardTracker::new();
        let mut core = RecordingCore { handle_keys: true, ..Default::default() };

        let down = tracker.handle::<(), _>(&key_down("z", Modifiers::default()), true, &mut core);
        let up = tracker.handle::<(), _>(&key_up("z"), true, &mut core);

        assert_eq!(down, Some(EventResponse::CONSUME));
        assert_eq!(up, Some(EventResponse::CONSUME));
    }

    #[test]
    fn unhandled_key_passes_through() {
        let mut tracker = KeyboardTracker::new();
        let mut core = RecordingCore::default();

        let response = tracker.handle::<(), _>(&key_down("F5", Modifiers::default()), true, &mut core);
        assert_eq!(response, Some(EventResponse::PASS));
        assert_eq!(core.calls.len(), 2);
    }

    #[test]
    fn other_events_are_not_handled() {
        let mut tracker = KeyboardTracker::new();
        let mut core = RecordingCore::default();
        assert_eq!(tracker.handle::<(), _>(&HostEvent::MouseUp, true, &mut core), None);
    }
}
