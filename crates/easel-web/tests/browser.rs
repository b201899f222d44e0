#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use easel_bridge::BridgeConfig;
use easel_bridge::PointerModeSelection;
use easel_bridge::core::{Frame, UiCore};
use easel_bridge::input::{Key, PointerMode};
use easel_web::{CanvasTarget, WebBridge};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct Probe {
    resizes: Vec<(f32, f32, f32)>,
    keys: Vec<Key>,
    draws: usize,
}

impl UiCore<CanvasTarget> for Probe {
    fn on_resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.resizes.push((width, height, pixel_ratio));
    }

    fn key_down(&mut self, key: &Key) -> bool {
        self.keys.push(key.clone());
        true
    }

    fn on_draw(&mut self, frame: &mut Frame<'_, CanvasTarget>) {
        frame.target.context.clear_rect(0.0, 0.0, frame.size.width as f64, frame.size.height as f64);
        self.draws += 1;
    }
}

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    document.body().expect("body").append_child(&canvas).expect("append");
    canvas
}

fn mouse_config() -> BridgeConfig {
    BridgeConfig {
        pointer_mode: PointerModeSelection::Mouse,
        pixel_ratio: Some(2.0),
        ..BridgeConfig::default()
    }
}

#[wasm_bindgen_test]
fn attach_sizes_backing_store_and_css_box() {
    let canvas = canvas();
    let bridge = WebBridge::attach(canvas.clone(), Probe::default(), 320.0, 200.0, mouse_config()).expect("attach");

    assert_eq!((canvas.width(), canvas.height()), (640, 400));
    let style = canvas.style();
    assert_eq!(style.get_property_value("width").expect("width"), "320px");
    assert_eq!(style.get_property_value("max-width").expect("max-width"), "100%");
    assert_eq!(canvas.get_attribute("tabindex").as_deref(), Some("0"));

    assert_eq!(bridge.pointer_mode(), PointerMode::Mouse);
    assert_eq!(bridge.core().borrow().resizes, vec![(320.0, 200.0, 2.0)]);
}

#[wasm_bindgen_test]
fn keys_are_delivered_only_to_a_focused_canvas() {
    let canvas = canvas();
    let bridge = WebBridge::attach(canvas.clone(), Probe::default(), 100.0, 100.0, mouse_config()).expect("attach");
    let document = web_sys::window().and_then(|w| w.document()).expect("document");

    let init = KeyboardEventInit::new();
    init.set_key("a");
    init.set_cancelable(true);

    let unfocused = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    document.dispatch_event(&unfocused).expect("dispatch");
    assert!(bridge.core().borrow().keys.is_empty());

    canvas.focus().expect("focus");
    let focused = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    document.dispatch_event(&focused).expect("dispatch");

    assert_eq!(bridge.core().borrow().keys, vec![Key::Character("a".to_owned())]);
    assert!(focused.default_prevented());
}

#[wasm_bindgen_test]
fn save_file_does_not_fail() {
    let canvas = canvas();
    let bridge = WebBridge::attach(canvas, Probe::default(), 100.0, 100.0, mouse_config()).expect("attach");
    bridge.save_file("hello.txt", b"hello", "text/plain").expect("save");
}

#[wasm_bindgen_test]
fn detach_is_idempotent() {
    let mut bridge = WebBridge::attach(canvas(), Probe::default(), 100.0, 100.0, mouse_config()).expect("attach");
    bridge.detach();
    bridge.detach();
    let _shared: Rc<RefCell<Probe>> = bridge.core();
}
