//! Browser host for `easel-bridge`.
//!
//! Attaches a UI core to an `HtmlCanvasElement`: DOM listeners feed the
//! bridge, `requestAnimationFrame` drives redraws, the canvas 2D context is
//! the raster target, and files arrive through drops or a hidden file input.

mod element;
mod error;
mod files;
mod host;
mod listeners;
mod logging;
mod picker;
mod raster;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use easel_bridge::core::UiCore;
use easel_bridge::host::Host;
use easel_bridge::ingest::{FileOutcome, HostFile, PickerOptions};
use easel_bridge::input::PointerMode;
use easel_bridge::{Bridge, BridgeConfig};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub use element::CanvasElement;
pub use files::WebFile;
pub use host::WebHost;
pub use logging::init_console;
pub use picker::HiddenFileInput;
pub use raster::{Canvas2dBackend, CanvasTarget};

use error::to_js;
use listeners::Listeners;

type SharedBridge<C> = Rc<RefCell<Bridge<WebHost, C>>>;

/// A UI core attached to a canvas. Dropping it detaches.
pub struct WebBridge<C>
where
    C: UiCore<CanvasTarget> + 'static,
{
    bridge: SharedBridge<C>,
    listeners: Listeners,
}

impl<C> WebBridge<C>
where
    C: UiCore<CanvasTarget> + 'static,
{
    /// Attaches `core` to `canvas` at `width × height` logical pixels.
    pub fn attach(
        canvas: HtmlCanvasElement,
        core: C,
        width: f32,
        height: f32,
        config: BridgeConfig,
    ) -> Result<Self, JsValue> {
        let host = WebHost::new().map_err(to_js)?;
        let element = CanvasElement::new(canvas.clone(), host.document().clone());
        element.ensure_focusable();

        let bridge = Bridge::attach(host, element, core, width, height, config).map_err(to_js)?;
        let bridge: SharedBridge<C> = Rc::new(RefCell::new(bridge));

        {
            let attached = bridge.borrow();
            attached.host().install_picked_hook(picked_hook(Rc::downgrade(&bridge)));
            attached.host().install_frame_callback(frame_callback(Rc::downgrade(&bridge)));
        }

        let listeners = listeners::bind(&bridge, &canvas)?;
        Ok(Self { bridge, listeners })
    }

    /// Shared handle to the UI core.
    pub fn core(&self) -> Rc<RefCell<C>> {
        self.bridge.borrow().core()
    }

    pub fn pointer_mode(&self) -> PointerMode {
        self.bridge.borrow().pointer_mode()
    }

    /// Resizes to `width × height` logical pixels at the current device
    /// pixel ratio.
    pub fn resize(&self, width: f32, height: f32) -> Result<(), JsValue> {
        let mut bridge = self.bridge.borrow_mut();
        let pixel_ratio = bridge.host().device_pixel_ratio();
        bridge.resize(width, height, pixel_ratio).map_err(to_js)
    }

    /// Shows the browser file picker.
    pub fn open_files<F>(&self, options: &PickerOptions, callback: F) -> Result<(), JsValue>
    where
        F: FnOnce(Vec<FileOutcome>) + 'static,
    {
        self.bridge.borrow_mut().open_files(options, callback).map_err(to_js)
    }

    /// Offers `bytes` as a download named `filename`.
    pub fn save_file(&self, filename: &str, bytes: &[u8], mime_type: &str) -> Result<(), JsValue> {
        self.bridge.borrow().save_file(filename, bytes, mime_type).map_err(to_js)
    }

    /// Removes every listener and stops the redraw loop. Idempotent.
    pub fn detach(&mut self) {
        self.listeners.remove_all();
        let mut bridge = self.bridge.borrow_mut();
        bridge.detach();
        bridge.host().cancel_frame();
    }
}

impl<C> Drop for WebBridge<C>
where
    C: UiCore<CanvasTarget> + 'static,
{
    fn drop(&mut self) {
        self.detach();
    }
}

fn frame_callback<C>(bridge: Weak<RefCell<Bridge<WebHost, C>>>) -> Closure<dyn FnMut(f64)>
where
    C: UiCore<CanvasTarget> + 'static,
{
    Closure::new(move |timestamp: f64| {
        let Some(shared) = bridge.upgrade() else {
            return;
        };
        let Ok(mut attached) = shared.try_borrow_mut() else {
            log::error!("frame callback re-entered the bridge; redraw loop lost");
            return;
        };
        if let Err(err) = attached.frame(timestamp) {
            log::error!("redraw loop stopped: {err:#}");
        }
    })
}

fn picked_hook<C>(bridge: Weak<RefCell<Bridge<WebHost, C>>>) -> host::PickedHook
where
    C: UiCore<CanvasTarget> + 'static,
{
    Rc::new(move |files: Vec<Box<dyn HostFile>>| {
        let Some(shared) = bridge.upgrade() else {
            return;
        };
        match shared.try_borrow_mut() {
            Ok(mut attached) => attached.picker_selected(files),
            Err(_) => log::warn!("file selection dropped: bridge busy"),
        }
    })
}
