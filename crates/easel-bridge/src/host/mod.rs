//! Host environment seam.
//!
//! The bridge never talks to a windowing system directly. A host adapter
//! (see the `easel-web` crate) translates native events into [`HostEvent`]s,
//! applies the returned [`EventResponse`], and implements [`Host`] and
//! [`HostElement`] for the resources the bridge needs.

mod element;
mod event;

use std::future::Future;
use std::pin::Pin;

pub use element::{ElementBox, HostElement};
pub use event::{EventResponse, HostEvent, Target};

use crate::ingest::PickerControl;
use crate::surface::RasterBackend;

/// A unit of asynchronous work run on the host's single event thread.
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Services the embedding environment provides to the bridge.
pub trait Host {
    /// The element the surface is bound to.
    type Element: HostElement;

    /// Allocator for backing raster targets.
    type Raster: RasterBackend;

    /// Whether the host reports touch capability. Read once at attach.
    fn is_touch_capable(&self) -> bool;

    /// Current device pixel ratio.
    fn device_pixel_ratio(&self) -> f32;

    /// Creates the raster backend bound to `element`.
    fn create_raster(&self, element: &Self::Element) -> Self::Raster;

    /// Requests one display-refresh callback. The host answers by calling
    /// `Bridge::frame` exactly once.
    fn request_frame(&self);

    /// Runs `task` cooperatively on the event thread.
    fn spawn_local(&self, task: LocalTask);

    /// Creates the hidden file-selection control.
    fn create_picker_control(&self) -> anyhow::Result<Box<dyn PickerControl>>;

    /// Hands `bytes` to the host as a download named `filename`.
    fn save_file(&self, filename: &str, bytes: &[u8], mime_type: &str) -> anyhow::Result<()>;
}
