use crate::coords::{ClientRect, Size};

/// Layout box written to the surface element on every resize.
///
/// Hosts apply `width`/`height` as the element's logical box, cap the visual
/// box at the container (100% on both axes) and keep `aspect_ratio` so the
/// element shrinks proportionally when capped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementBox {
    pub width: f32,
    pub height: f32,
    pub aspect_ratio: f32,
}

impl ElementBox {
    pub fn for_size(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            aspect_ratio: size.aspect_ratio(),
        }
    }
}

/// The host element the surface is attached to.
///
/// All methods take `&self`; host elements are handles into state owned by
/// the host (a DOM node, a window).
pub trait HostElement {
    /// Rendered bounding box in client coordinates.
    fn bounding_rect(&self) -> ClientRect;

    /// Whether this element currently holds keyboard focus in the host.
    fn is_focused(&self) -> bool;

    /// Writes the logical layout box.
    fn apply_box(&self, layout: &ElementBox);
}
