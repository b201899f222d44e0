use crate::coords::Size;
use crate::time::FrameTime;

/// Per-frame context passed to `UiCore::on_draw`.
pub struct Frame<'a, T> {
    /// Backing raster target, sized `size × pixel_ratio`.
    pub target: &'a mut T,
    /// Logical surface size.
    pub size: Size,
    pub pixel_ratio: f32,
    pub time: FrameTime,
}
