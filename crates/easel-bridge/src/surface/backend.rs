use crate::coords::PhysicalSize;

/// Allocates backing raster targets.
///
/// Most raster APIs need a fresh context when the backing size changes, so the
/// surface never resizes a target in place: every size change calls
/// [`RasterBackend::allocate`] and drops the previous target.
pub trait RasterBackend {
    type Target;

    /// Allocates a target of `size` physical pixels.
    ///
    /// Failure (no context available, size over the device limit) is fatal to
    /// the surface.
    fn allocate(&mut self, size: PhysicalSize) -> anyhow::Result<Self::Target>;
}
