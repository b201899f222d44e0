use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result, ensure};

use crate::coords::{Point, Size};
use crate::core::{Frame, UiCore, View};
use crate::host::{EventResponse, Host, HostElement, HostEvent, Target};
use crate::ingest::{DropBatch, FileOutcome, FilePicker, HostFile, PickerOptions, handle_drag, read_batch};
use crate::input::{KeyboardTracker, PointerMode, PointerUnifier, dispatch_pointer};
use crate::schedule::{RedrawScheduler, SchedulerState};
use crate::surface::{RasterBackend, Surface};
use crate::time::FrameClock;

/// Raster target type handed to the UI core for host `H`.
pub type RasterTarget<H> = <<H as Host>::Raster as RasterBackend>::Target;

/// How the pointer device mode is chosen at attach.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PointerModeSelection {
    /// Touch when the host reports touch capability, mouse otherwise.
    #[default]
    Auto,
    Touch,
    Mouse,
}

impl PointerModeSelection {
    fn resolve(self, touch_capable: bool) -> PointerMode {
        match self {
            PointerModeSelection::Auto => PointerMode::for_host(touch_capable),
            PointerModeSelection::Touch => PointerMode::Touch,
            PointerModeSelection::Mouse => PointerMode::Mouse,
        }
    }
}

/// Bridge configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub pointer_mode: PointerModeSelection,

    /// Overrides the host's device pixel ratio at attach.
    pub pixel_ratio: Option<f32>,

    /// Frame clock clamps in seconds.
    pub dt_min: f32,
    pub dt_max: f32,
}

impl BridgeConfig {
    /// Rejects clock clamps that are not finite or not ordered.
    pub fn validate(&self) -> Result<()> {
        let (dt_min, dt_max) = (self.dt_min, self.dt_max);
        ensure!(
            dt_min.is_finite() && dt_max.is_finite() && 0.0 <= dt_min && dt_min <= dt_max,
            "invalid frame clock clamps: dt_min {dt_min}, dt_max {dt_max}"
        );
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            pointer_mode: PointerModeSelection::Auto,
            pixel_ratio: None,
            dt_min: 0.0001,
            dt_max: 0.25,
        }
    }
}

/// One surface bound to one host element and one UI core.
///
/// All entry points run on the host's event thread. The UI core is shared
/// with in-flight file reads, which deliver from spawned tasks.
pub struct Bridge<H, C>
where
    H: Host,
    C: UiCore<RasterTarget<H>> + 'static,
{
    host: H,
    element: H::Element,
    core: Rc<RefCell<C>>,
    surface: Surface<H::Raster>,
    view: View,
    pointer: PointerUnifier,
    keyboard: KeyboardTracker,
    picker: FilePicker,
    scheduler: RedrawScheduler,
    clock: FrameClock,
}

impl<H, C> Bridge<H, C>
where
    H: Host,
    C: UiCore<RasterTarget<H>> + 'static,
{
    /// Creates the surface on `element`, picks the pointer mode and starts
    /// the redraw loop.
    ///
    /// An invalid config or a surface allocation failure aborts the attach.
    pub fn attach(host: H, element: H::Element, core: C, width: f32, height: f32, config: BridgeConfig) -> Result<Self> {
        config.validate().context("invalid bridge config")?;

        let pixel_ratio = config.pixel_ratio.unwrap_or_else(|| host.device_pixel_ratio());
        let raster = host.create_raster(&element);
        let surface = Surface::create(&element, raster, Size::new(width, height), pixel_ratio)
            .context("failed to attach surface")?;

        let mode = config.pointer_mode.resolve(host.is_touch_capable());
        log::info!("bridge attached: {width}x{height} @ {pixel_ratio}, {mode:?} input");

        let view = core.get_view();
        let core = Rc::new(RefCell::new(core));
        core.borrow_mut().on_resize(width, height, pixel_ratio);

        let mut bridge = Self {
            host,
            element,
            core,
            surface,
            view,
            pointer: PointerUnifier::new(mode),
            keyboard: KeyboardTracker::new(),
            picker: FilePicker::new(),
            scheduler: RedrawScheduler::new(),
            clock: FrameClock::with_clamps(config.dt_min, config.dt_max),
        };
        bridge.scheduler.start(|| bridge.host.request_frame());
        Ok(bridge)
    }

    #[inline]
    pub fn pointer_mode(&self) -> PointerMode {
        self.pointer.mode()
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn element(&self) -> &H::Element {
        &self.element
    }

    #[inline]
    pub fn surface(&self) -> &Surface<H::Raster> {
        &self.surface
    }

    /// Shared handle to the UI core.
    pub fn core(&self) -> Rc<RefCell<C>> {
        Rc::clone(&self.core)
    }

    #[inline]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    #[inline]
    pub fn has_focus(&self) -> bool {
        self.keyboard.has_focus()
    }

    /// Dispatches one raw host event.
    pub fn handle_event(&mut self, event: HostEvent) -> EventResponse {
        let surface = &self.surface;
        let element = &self.element;
        let to_logical = |client: Point| surface.client_to_logical(client, element.bounding_rect());

        let mut core = self.core.borrow_mut();

        if let Some((action, response)) = self.pointer.translate(&event, to_logical) {
            if let Some(action) = action {
                dispatch_pointer::<RasterTarget<H>, C>(action, &mut *core);
            }
            return response;
        }

        if let Some(response) = self
            .keyboard
            .handle::<RasterTarget<H>, C>(&event, element.is_focused(), &mut *core)
        {
            return response;
        }

        if let Some(response) = handle_drag::<RasterTarget<H>, C, _>(&event, to_logical, &mut *core) {
            return response;
        }

        log::trace!("event not bound in {:?} mode: {event:?}", self.pointer.mode());
        EventResponse::PASS
    }

    /// Handles a drop of `files` on `target`.
    ///
    /// Drops on the surface are read concurrently and delivered once through
    /// `on_file_dropped`; drops elsewhere are left to the host. A surface drop
    /// carrying no files is suppressed and never delivered.
    pub fn drop_files(&mut self, target: Target, files: Vec<Box<dyn HostFile>>) -> EventResponse {
        let Some(batch) = DropBatch::accept(target, files) else {
            return EventResponse::PASS;
        };
        if batch.is_empty() {
            log::debug!("drop without files ignored");
            return EventResponse::PREVENT;
        }

        log::debug!("reading {} dropped file(s)", batch.names().len());
        let core = Rc::clone(&self.core);
        self.host.spawn_local(Box::pin(async move {
            let (names, contents) = batch.read().await;
            core.borrow_mut().on_file_dropped(names, contents);
        }));
        EventResponse::PREVENT
    }

    /// Host display-refresh callback.
    ///
    /// Applies a pending view resize, draws, then re-arms the next refresh.
    /// A failed resize is fatal: the loop stops and the error propagates.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<()> {
        if !self.scheduler.begin_frame() {
            return Ok(());
        }

        if let Some(size) = self.view.take_requested_size() {
            let pixel_ratio = self.surface.pixel_ratio();
            if let Err(err) = self.apply_resize(size, pixel_ratio) {
                self.scheduler.stop();
                return Err(err.context("requested view resize failed"));
            }
        }

        let time = self.clock.tick(timestamp_ms);
        let size = self.surface.logical_size();
        let pixel_ratio = self.surface.pixel_ratio();
        {
            let mut frame = Frame {
                target: self.surface.target_mut(),
                size,
                pixel_ratio,
                time,
            };
            self.core.borrow_mut().on_draw(&mut frame);
        }

        self.scheduler.end_frame(|| self.host.request_frame());
        Ok(())
    }

    /// Resizes the surface and notifies the core.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) -> Result<()> {
        self.apply_resize(Size::new(width, height), pixel_ratio)
    }

    fn apply_resize(&mut self, size: Size, pixel_ratio: f32) -> Result<()> {
        self.surface.resize(&self.element, size, pixel_ratio)?;
        self.core.borrow_mut().on_resize(size.width, size.height, pixel_ratio);
        Ok(())
    }

    /// Shows the file picker; `callback` receives the selection once read.
    pub fn open_files<F>(&mut self, options: &PickerOptions, callback: F) -> Result<()>
    where
        F: FnOnce(Vec<FileOutcome>) + 'static,
    {
        let host = &self.host;
        self.picker.open(|| host.create_picker_control(), options, Box::new(callback))
    }

    /// Host notification that the picker control completed a selection.
    pub fn picker_selected(&mut self, files: Vec<Box<dyn HostFile>>) {
        let Some(callback) = self.picker.take_callback() else {
            log::debug!("file selection with no armed listener ignored");
            return;
        };

        log::debug!("reading {} selected file(s)", files.len());
        self.host.spawn_local(Box::pin(async move {
            callback(read_batch(files).await);
        }));
    }

    /// Offers `bytes` to the user as a download.
    pub fn save_file(&self, filename: &str, bytes: &[u8], mime_type: &str) -> Result<()> {
        self.host
            .save_file(filename, bytes, mime_type)
            .with_context(|| format!("failed to save '{filename}'"))
    }

    /// Stops the redraw loop and removes the picker control. Idempotent.
    pub fn detach(&mut self) {
        if self.scheduler.state() == SchedulerState::Stopped && !self.picker.has_control() {
            return;
        }
        self.scheduler.stop();
        self.picker.dispose();
        log::info!("bridge detached");
    }
}

impl<H, C> Drop for Bridge<H, C>
where
    H: Host,
    C: UiCore<RasterTarget<H>> + 'static,
{
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BridgeConfig::default().validate().is_ok());
    }

    #[test]
    fn reversed_or_non_finite_clamps_are_rejected() {
        let reversed = BridgeConfig {
            dt_min: 0.5,
            dt_max: 0.1,
            ..BridgeConfig::default()
        };
        assert!(reversed.validate().is_err());

        let nan = BridgeConfig {
            dt_max: f32::NAN,
            ..BridgeConfig::default()
        };
        assert!(nan.validate().is_err());

        let negative = BridgeConfig {
            dt_min: -0.01,
            ..BridgeConfig::default()
        };
        assert!(negative.validate().is_err());
    }
}
