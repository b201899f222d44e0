use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use easel_bridge::host::{Host, LocalTask};
use easel_bridge::ingest::{HostFile, PickerControl};
use js_sys::{Array, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

use crate::element::CanvasElement;
use crate::error::{describe, js_error};
use crate::picker::HiddenFileInput;
use crate::raster::Canvas2dBackend;

pub(crate) type PickedHook = Rc<dyn Fn(Vec<Box<dyn HostFile>>)>;

/// Callbacks that reach back into the bridge, installed once it exists.
///
/// The bridge owns the host, so the host only holds these late-bound hooks;
/// they capture weak bridge references.
#[derive(Default)]
pub(crate) struct Hooks {
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    frame_pending: Cell<bool>,
    frame_handle: Cell<Option<i32>>,
    picked: RefCell<Option<PickedHook>>,
}

impl Hooks {
    pub(crate) fn picked(&self) -> Option<PickedHook> {
        self.picked.borrow().clone()
    }
}

/// Browser implementation of the bridge host.
pub struct WebHost {
    window: Window,
    document: Document,
    hooks: Rc<Hooks>,
}

impl WebHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().context("no global window")?;
        let document = window.document().context("window has no document")?;
        Ok(Self {
            window,
            document,
            hooks: Rc::default(),
        })
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Installs the display-refresh callback, answering any request made
    /// before it existed.
    pub(crate) fn install_frame_callback(&self, callback: Closure<dyn FnMut(f64)>) {
        *self.hooks.frame.borrow_mut() = Some(callback);
        if self.hooks.frame_pending.replace(false) {
            self.request_frame();
        }
    }

    /// Cancels the outstanding refresh request, if any.
    pub(crate) fn cancel_frame(&self) {
        self.hooks.frame_pending.set(false);
        if let Some(handle) = self.hooks.frame_handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {}", describe(&err));
            }
        }
    }

    pub(crate) fn install_picked_hook(&self, hook: PickedHook) {
        *self.hooks.picked.borrow_mut() = Some(hook);
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        // A queued rAF would otherwise invoke the freed frame closure.
        self.cancel_frame();
    }
}

impl Host for WebHost {
    type Element = CanvasElement;
    type Raster = Canvas2dBackend;

    fn is_touch_capable(&self) -> bool {
        self.window.navigator().max_touch_points() > 0
            || Reflect::has(&self.window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.window.device_pixel_ratio() as f32
    }

    fn create_raster(&self, element: &CanvasElement) -> Canvas2dBackend {
        Canvas2dBackend::new(element.canvas().clone())
    }

    fn request_frame(&self) {
        let slot = self.hooks.frame.borrow();
        let Some(callback) = slot.as_ref() else {
            self.hooks.frame_pending.set(true);
            return;
        };
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.hooks.frame_handle.set(Some(handle)),
            Err(err) => log::error!("requestAnimationFrame failed: {}", describe(&err)),
        }
    }

    fn spawn_local(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn create_picker_control(&self) -> Result<Box<dyn PickerControl>> {
        let input = HiddenFileInput::create(&self.document, Rc::clone(&self.hooks))?;
        Ok(Box::new(input))
    }

    fn save_file(&self, filename: &str, bytes: &[u8], mime_type: &str) -> Result<()> {
        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
        let anchor = self
            .document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| anyhow!("created element is not an anchor"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_error)?;
        log::debug!("offered '{filename}' ({} bytes) as download", bytes.len());
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use js_sys::Promise;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(window: &Window, ms: i32) {
        let promise = Promise::new(&mut |resolve, _reject| {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        });
        let _ = JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn dropping_the_host_cancels_the_queued_frame() {
        let host = WebHost::new().expect("host");
        let window = host.window().clone();
        let hooks = Rc::clone(&host.hooks);

        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        host.install_frame_callback(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| flag.set(true)));
        host.request_frame();
        assert!(hooks.frame_handle.get().is_some());

        drop(host);
        sleep(&window, 100).await;

        assert!(!fired.get());
        assert!(hooks.frame_handle.get().is_none());
    }
}
