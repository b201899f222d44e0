use anyhow::{Context, Result, ensure};

use crate::coords::{ClientRect, PhysicalSize, Point, Size};
use crate::host::{ElementBox, HostElement};

use super::RasterBackend;

/// Drawable target bound to a host element.
///
/// Invariant: after `create` and after every successful `resize`,
/// `physical_size() == logical_size() × pixel_ratio()` (rounded to whole
/// pixels) and the target was allocated at that physical size.
pub struct Surface<B: RasterBackend> {
    backend: B,
    target: B::Target,
    logical: Size,
    pixel_ratio: f32,
    physical: PhysicalSize,
}

impl<B: RasterBackend> Surface<B> {
    /// Allocates the target for `size` at `pixel_ratio` and lays out `element`.
    pub fn create<E>(element: &E, mut backend: B, size: Size, pixel_ratio: f32) -> Result<Self>
    where
        E: HostElement + ?Sized,
    {
        validate(size, pixel_ratio)?;

        let physical = size.to_physical(pixel_ratio);
        let target = backend
            .allocate(physical)
            .context("failed to allocate surface raster context")?;

        element.apply_box(&ElementBox::for_size(size));

        log::debug!(
            "surface created: {}x{} logical, {}x{} physical @ {}",
            size.width,
            size.height,
            physical.width,
            physical.height,
            pixel_ratio
        );

        Ok(Self {
            backend,
            target,
            logical: size,
            pixel_ratio,
            physical,
        })
    }

    /// Re-lays out `element` and replaces the target at the new physical size.
    ///
    /// On error the surface keeps its previous target and dimensions.
    pub fn resize<E>(&mut self, element: &E, size: Size, pixel_ratio: f32) -> Result<()>
    where
        E: HostElement + ?Sized,
    {
        validate(size, pixel_ratio)?;

        let physical = size.to_physical(pixel_ratio);
        let target = self
            .backend
            .allocate(physical)
            .with_context(|| {
                format!(
                    "failed to reallocate surface raster context at {}x{}",
                    physical.width, physical.height
                )
            })?;

        element.apply_box(&ElementBox::for_size(size));

        self.target = target;
        self.logical = size;
        self.pixel_ratio = pixel_ratio;
        self.physical = physical;

        log::debug!(
            "surface resized: {}x{} logical, {}x{} physical @ {}",
            size.width,
            size.height,
            physical.width,
            physical.height,
            pixel_ratio
        );
        Ok(())
    }

    #[inline]
    pub fn logical_size(&self) -> Size {
        self.logical
    }

    #[inline]
    pub fn physical_size(&self) -> PhysicalSize {
        self.physical
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    #[inline]
    pub fn target(&self) -> &B::Target {
        &self.target
    }

    #[inline]
    pub fn target_mut(&mut self) -> &mut B::Target {
        &mut self.target
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Converts a client-space point into logical surface coordinates.
    ///
    /// `rect` is the element's rendered bounding box, which may be smaller
    /// than the logical size when the container caps it. The top-left corner
    /// maps to `(0, 0)` and the bottom-right corner to the logical size.
    pub fn client_to_logical(&self, client: Point, rect: ClientRect) -> Point {
        let n = rect.normalize(client);
        Point::new(
            n.x * self.logical.width,
            n.y * self.logical.height,
        )
    }
}

fn validate(size: Size, pixel_ratio: f32) -> Result<()> {
    ensure!(
        size.is_valid(),
        "invalid surface size {}x{}",
        size.width,
        size.height
    );
    ensure!(
        pixel_ratio > 0.0 && pixel_ratio.is_finite(),
        "invalid device pixel ratio {pixel_ratio}"
    );
    Ok(())
}
