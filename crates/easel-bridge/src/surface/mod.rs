//! Surface management.
//!
//! This module is responsible for:
//! - allocating the backing raster target at physical resolution
//! - keeping the element's logical box in sync with the requested size
//! - converting client coordinates into logical surface coordinates

mod backend;
mod software;
mod surface;

pub use backend::RasterBackend;
pub use software::{Pixmap, SoftwareRaster};
pub use surface::Surface;
