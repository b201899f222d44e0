use std::cell::RefCell;
use std::rc::{Rc, Weak};

use easel_bridge::Bridge;
use easel_bridge::coords::Point;
use easel_bridge::core::UiCore;
use easel_bridge::host::{EventResponse, HostEvent, Target};
use easel_bridge::input::{Modifiers, MouseButton, PointerMode};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, DragEvent, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent,
    TouchEvent, WheelEvent,
};

use crate::error::describe;
use crate::files;
use crate::host::WebHost;
use crate::raster::CanvasTarget;

type Shared<C> = Weak<RefCell<Bridge<WebHost, C>>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// DOM listeners bound for one bridge; removed on drop.
#[derive(Default)]
pub(crate) struct Listeners {
    bound: Vec<Listener>,
}

impl Listeners {
    fn add<F>(&mut self, target: &EventTarget, kind: &'static str, passive: bool, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        self.bound.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    /// Forwards `kind` events through `translate` into `Bridge::handle_event`.
    fn forward<C, F>(
        &mut self,
        bridge: &Shared<C>,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        translate: F,
    ) -> Result<(), JsValue>
    where
        C: UiCore<CanvasTarget> + 'static,
        F: Fn(&Event) -> Option<HostEvent> + 'static,
    {
        let bridge = Weak::clone(bridge);
        self.add(target, kind, passive, move |event: Event| {
            let Some(host_event) = translate(&event) else {
                return;
            };
            let Some(bridge) = bridge.upgrade() else {
                return;
            };
            // Re-entrant dispatch, e.g. a core calling `focus()` on the canvas.
            let Ok(mut bridge) = bridge.try_borrow_mut() else {
                log::warn!("{kind} dropped: bridge busy");
                return;
            };
            let response = bridge.handle_event(host_event);
            apply(&event, response);
        })
    }

    pub(crate) fn remove_all(&mut self) {
        for listener in self.bound.drain(..) {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {} listener: {}", listener.kind, describe(&err));
            }
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// Binds every listener the bridge needs. Only the handlers of the bridge's
/// pointer mode are installed.
pub(crate) fn bind<C>(bridge: &Rc<RefCell<Bridge<WebHost, C>>>, canvas: &HtmlCanvasElement) -> Result<Listeners, JsValue>
where
    C: UiCore<CanvasTarget> + 'static,
{
    let (mode, document) = {
        let bridge = bridge.borrow();
        (bridge.pointer_mode(), bridge.host().document().clone())
    };
    let shared = Rc::downgrade(bridge);
    let surface: &EventTarget = canvas.as_ref();
    let doc: &EventTarget = document.as_ref();
    let body: EventTarget = match document.body() {
        Some(body) => body.into(),
        None => doc.clone(),
    };

    let mut listeners = Listeners::default();

    match mode {
        PointerMode::Touch => {
            listeners.forward(&shared, surface, "touchstart", true, |event| {
                Some(HostEvent::TouchStart {
                    touches: touches(event.dyn_ref()?),
                })
            })?;
            listeners.forward(&shared, surface, "touchmove", false, |event| {
                Some(HostEvent::TouchMove {
                    touches: touches(event.dyn_ref()?),
                })
            })?;
            listeners.forward(&shared, surface, "touchend", true, |_| Some(HostEvent::TouchEnd))?;
        }
        PointerMode::Mouse => {
            listeners.forward(&shared, surface, "mousedown", false, |event| {
                let mouse: &MouseEvent = event.dyn_ref()?;
                Some(HostEvent::MouseDown {
                    client: client(mouse),
                    button: MouseButton::from_index(mouse.button()),
                })
            })?;
            listeners.forward(&shared, surface, "contextmenu", false, |event| {
                Some(HostEvent::ContextMenu {
                    client: client(event.dyn_ref()?),
                })
            })?;
            listeners.forward(&shared, doc, "mouseup", true, |_| Some(HostEvent::MouseUp))?;
            listeners.forward(&shared, doc, "mousemove", true, |event| {
                Some(HostEvent::MouseMove {
                    client: client(event.dyn_ref()?),
                })
            })?;
        }
    }

    listeners.forward(&shared, surface, "wheel", false, |event| {
        let wheel: &WheelEvent = event.dyn_ref()?;
        Some(HostEvent::Wheel {
            delta_x: wheel.delta_x() as f32,
            delta_y: wheel.delta_y() as f32,
        })
    })?;

    listeners.forward(&shared, surface, "focus", true, |_| Some(HostEvent::Focus))?;
    listeners.forward(&shared, surface, "blur", true, |_| Some(HostEvent::Blur))?;

    listeners.forward(&shared, doc, "keydown", false, |event| {
        let key: &KeyboardEvent = event.dyn_ref()?;
        Some(HostEvent::KeyDown {
            key: key.key(),
            modifiers: modifiers(key),
        })
    })?;
    listeners.forward(&shared, doc, "keyup", false, |event| {
        let key: &KeyboardEvent = event.dyn_ref()?;
        Some(HostEvent::KeyUp {
            key: key.key(),
            modifiers: modifiers(key),
        })
    })?;

    let over_canvas = canvas.clone();
    listeners.forward(&shared, doc, "dragover", false, move |event| {
        let drag: &DragEvent = event.dyn_ref()?;
        Some(HostEvent::DragOver {
            client: client(drag),
            target: target_of(event, &over_canvas),
            names: dragged_names(drag),
        })
    })?;
    listeners.forward(&shared, &body, "dragleave", true, |_| Some(HostEvent::DragLeave))?;

    let drop_canvas = canvas.clone();
    let drop_bridge = Weak::clone(&shared);
    listeners.add(doc, "drop", false, move |event: Event| {
        let Some(drag) = event.dyn_ref::<DragEvent>() else {
            return;
        };
        let Some(bridge) = drop_bridge.upgrade() else {
            return;
        };
        let target = target_of(&event, &drop_canvas);
        let dropped = files::from_list(drag.data_transfer().and_then(|transfer| transfer.files()));
        let Ok(mut bridge) = bridge.try_borrow_mut() else {
            log::warn!("drop dropped: bridge busy");
            return;
        };
        let response = bridge.drop_files(target, dropped);
        apply(&event, response);
    })?;

    log::debug!("bound {} DOM listeners for {mode:?} input", listeners.bound.len());
    Ok(listeners)
}

fn apply(event: &Event, response: EventResponse) {
    if response.prevent_default {
        event.prevent_default();
    }
    if response.stop_propagation {
        event.stop_propagation();
    }
}

fn client(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f32, event.client_y() as f32)
}

fn touches(event: &TouchEvent) -> Vec<Point> {
    let list = event.touches();
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|touch| Point::new(touch.client_x() as f32, touch.client_y() as f32))
        .collect()
}

fn modifiers(event: &KeyboardEvent) -> Modifiers {
    Modifiers {
        meta: event.meta_key(),
        shift: event.shift_key(),
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
    }
}

fn target_of(event: &Event, canvas: &HtmlCanvasElement) -> Target {
    let surface: &EventTarget = canvas.as_ref();
    if event.target().as_ref() == Some(surface) {
        Target::Surface
    } else {
        Target::Elsewhere
    }
}

/// File names of an in-progress drag. Browsers may withhold them until drop.
fn dragged_names(event: &DragEvent) -> Vec<String> {
    let Some(transfer) = event.data_transfer() else {
        return Vec::new();
    };

    let from_files: Vec<String> = transfer
        .files()
        .map(|list| (0..list.length()).filter_map(|index| list.get(index)).map(|file| file.name()).collect())
        .unwrap_or_default();
    if !from_files.is_empty() {
        return from_files;
    }

    let items = transfer.items();
    (0..items.length())
        .filter_map(|index| items.get(index))
        .filter_map(|item| item.get_as_file().ok().flatten())
        .map(|file| file.name())
        .collect()
}
