use anyhow::{Context, anyhow};
use easel_bridge::coords::PhysicalSize;
use easel_bridge::surface::RasterBackend;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::js_error;

/// A 2D context bound to the canvas backing store.
pub struct CanvasTarget {
    pub context: CanvasRenderingContext2d,
    pub size: PhysicalSize,
}

/// Allocates 2D contexts by resizing the canvas backing store.
pub struct Canvas2dBackend {
    canvas: HtmlCanvasElement,
}

impl Canvas2dBackend {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl RasterBackend for Canvas2dBackend {
    type Target = CanvasTarget;

    fn allocate(&mut self, size: PhysicalSize) -> anyhow::Result<CanvasTarget> {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);

        let context = self
            .canvas
            .get_context("2d")
            .map_err(js_error)
            .context("canvas rejected 2d context request")?
            .ok_or_else(|| anyhow!("2d context unavailable at {}x{}", size.width, size.height))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("canvas returned an unexpected context type"))?;

        log::debug!("allocated 2d context at {}x{}", size.width, size.height);
        Ok(CanvasTarget { context, size })
    }
}
