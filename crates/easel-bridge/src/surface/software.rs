use anyhow::ensure;

use crate::coords::PhysicalSize;

use super::RasterBackend;

/// CPU pixel buffer, one packed RGBA8 `u32` per physical pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    size: PhysicalSize,
    pixels: Vec<u32>,
}

impl Pixmap {
    fn new(size: PhysicalSize) -> Self {
        Self {
            size,
            pixels: vec![0; size.area() as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> PhysicalSize {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn fill(&mut self, rgba: u32) {
        self.pixels.fill(rgba);
    }

    /// Pixel at physical `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels.get((y as usize) * (self.size.width as usize) + x as usize).copied()
    }

    pub fn set(&mut self, x: u32, y: u32, rgba: u32) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        let idx = (y as usize) * (self.size.width as usize) + x as usize;
        self.pixels[idx] = rgba;
    }
}

/// Raster backend allocating [`Pixmap`]s in memory.
///
/// `max_dimension` plays the role of a device texture limit; allocations
/// beyond it fail the way a GPU context allocation would.
#[derive(Debug, Clone)]
pub struct SoftwareRaster {
    pub max_dimension: u32,
    allocations: u64,
}

impl SoftwareRaster {
    pub fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            allocations: 0,
        }
    }

    /// Number of successful allocations so far.
    pub fn allocations(&self) -> u64 {
        self.allocations
    }
}

impl Default for SoftwareRaster {
    fn default() -> Self {
        Self::new(8192)
    }
}

impl RasterBackend for SoftwareRaster {
    type Target = Pixmap;

    fn allocate(&mut self, size: PhysicalSize) -> anyhow::Result<Pixmap> {
        ensure!(!size.is_empty(), "raster size {}x{} is empty", size.width, size.height);
        ensure!(
            size.width <= self.max_dimension && size.height <= self.max_dimension,
            "raster size {}x{} exceeds maximum dimension {}",
            size.width,
            size.height,
            self.max_dimension
        );

        self.allocations += 1;
        log::trace!("allocated {}x{} pixmap", size.width, size.height);
        Ok(Pixmap::new(size))
    }
}
