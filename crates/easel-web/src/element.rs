use easel_bridge::coords::ClientRect;
use easel_bridge::host::{ElementBox, HostElement};
use web_sys::{Document, Element, HtmlCanvasElement};

use crate::error::describe;

/// The canvas the surface is attached to.
pub struct CanvasElement {
    canvas: HtmlCanvasElement,
    document: Document,
}

impl CanvasElement {
    pub fn new(canvas: HtmlCanvasElement, document: Document) -> Self {
        Self { canvas, document }
    }

    #[inline]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Canvases only receive focus and key events with a tab index.
    pub(crate) fn ensure_focusable(&self) {
        if self.canvas.has_attribute("tabindex") {
            return;
        }
        if let Err(err) = self.canvas.set_attribute("tabindex", "0") {
            log::warn!("canvas is not focusable: {}", describe(&err));
        }
    }
}

impl HostElement for CanvasElement {
    fn bounding_rect(&self) -> ClientRect {
        let rect = self.canvas.get_bounding_client_rect();
        ClientRect::new(rect.left() as f32, rect.top() as f32, rect.width() as f32, rect.height() as f32)
    }

    fn is_focused(&self) -> bool {
        let canvas: &Element = self.canvas.as_ref();
        self.document.active_element().as_ref() == Some(canvas)
    }

    fn apply_box(&self, layout: &ElementBox) {
        let style = self.canvas.style();
        let properties = [
            ("width", format!("{}px", layout.width)),
            ("height", format!("{}px", layout.height)),
            ("max-width", "100%".to_owned()),
            ("max-height", "100%".to_owned()),
            ("aspect-ratio", format!("{} / {}", layout.width, layout.height)),
        ];
        for (name, value) in properties {
            if let Err(err) = style.set_property(name, &value) {
                log::warn!("failed to set canvas {name}: {}", describe(&err));
            }
        }
    }
}
