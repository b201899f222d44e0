use std::rc::Rc;

use anyhow::{Result, anyhow};
use easel_bridge::ingest::{PickerControl, PickerOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement};

use crate::error::{describe, js_error};
use crate::files;
use crate::host::Hooks;

/// Hidden `<input type=file>` appended to the document body.
pub struct HiddenFileInput {
    input: HtmlInputElement,
    on_change: Closure<dyn FnMut(Event)>,
}

impl HiddenFileInput {
    pub(crate) fn create(document: &Document, hooks: Rc<Hooks>) -> Result<Self> {
        let input = document
            .create_element("input")
            .map_err(js_error)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| anyhow!("created element is not an input"))?;
        input.set_type("file");
        input.style().set_property("display", "none").map_err(js_error)?;

        let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
        body.append_child(&input).map_err(js_error)?;

        let source = input.clone();
        let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let selected = files::from_list(source.files());
            // Reset so picking the same file again still fires `change`.
            source.set_value("");
            match hooks.picked() {
                Some(picked) => picked(selected),
                None => log::warn!("file selection dropped: bridge not attached"),
            }
        });
        input
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(js_error)?;

        log::debug!("created hidden file input");
        Ok(Self { input, on_change })
    }

    fn set_flag(&self, name: &str, enabled: bool) {
        let result = if enabled {
            self.input.set_attribute(name, "true")
        } else {
            self.input.remove_attribute(name)
        };
        if let Err(err) = result {
            log::warn!("failed to update file input {name}: {}", describe(&err));
        }
    }
}

impl PickerControl for HiddenFileInput {
    fn configure(&self, options: &PickerOptions) {
        let accept = options.accept();
        if accept.is_empty() {
            self.set_flag("accept", false);
        } else if let Err(err) = self.input.set_attribute("accept", &accept) {
            log::warn!("failed to update file input accept: {}", describe(&err));
        }
        self.input.set_multiple(options.multiple);
        self.set_flag("webkitdirectory", options.directory);
    }

    fn show(&self) {
        self.input.click();
    }

    fn dispose(&self) {
        let _ = self
            .input
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref());
        self.input.remove();
    }
}
