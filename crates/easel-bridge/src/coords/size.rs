/// Size in logical (layout) pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Positive and finite on both axes.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height. Only meaningful for valid sizes.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }

    /// Backing-buffer size for this logical size at `pixel_ratio`.
    ///
    /// Rounds to the nearest whole pixel; fractional ratios such as 1.5 would
    /// otherwise truncate odd logical sizes.
    pub fn to_physical(self, pixel_ratio: f32) -> PhysicalSize {
        PhysicalSize {
            width: (self.width * pixel_ratio).round() as u32,
            height: (self.height * pixel_ratio).round() as u32,
        }
    }
}

/// Size of the backing raster in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_physical_scales_by_ratio() {
        assert_eq!(Size::new(400.0, 300.0).to_physical(2.0), PhysicalSize::new(800, 600));
        assert_eq!(Size::new(400.0, 300.0).to_physical(1.0), PhysicalSize::new(400, 300));
    }

    #[test]
    fn to_physical_rounds_fractional_ratio() {
        assert_eq!(Size::new(101.0, 33.0).to_physical(1.5), PhysicalSize::new(152, 50));
    }

    #[test]
    fn validity() {
        assert!(Size::new(1.0, 1.0).is_valid());
        assert!(!Size::new(0.0, 1.0).is_valid());
        assert!(!Size::new(1.0, -3.0).is_valid());
        assert!(!Size::new(f32::NAN, 1.0).is_valid());
        assert!(!Size::new(f32::INFINITY, 1.0).is_valid());
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert_eq!(Size::new(400.0, 300.0).aspect_ratio(), 400.0 / 300.0);
    }
}
