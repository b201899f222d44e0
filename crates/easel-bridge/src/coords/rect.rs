use super::Point;

/// On-screen bounding box of the surface element, in client pixels.
///
/// This is what the host reports for the element's rendered box, which may
/// differ from the logical size when the element is constrained by its
/// container (`max-width: 100%`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    #[inline]
    pub fn origin(self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Position of `client` as a fraction of the box (0..1 inside the box).
    ///
    /// Points outside the box map outside 0..1; an empty box maps everything
    /// to the origin.
    pub fn normalize(self, client: Point) -> Point {
        if self.is_empty() || !client.is_finite() {
            return Point::zero();
        }
        let local = client - self.origin();
        Point::new(local.x / self.width, local.y / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> ClientRect {
        ClientRect::new(x, y, w, h)
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_corners() {
        let rect = r(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.normalize(Point::new(10.0, 20.0)), Point::new(0.0, 0.0));
        assert_eq!(rect.normalize(Point::new(210.0, 120.0)), Point::new(1.0, 1.0));
        assert_eq!(rect.normalize(Point::new(110.0, 70.0)), Point::new(0.5, 0.5));
    }

    #[test]
    fn normalize_outside_is_not_clamped() {
        // Global mouse moves keep reporting past the element edge.
        let rect = r(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect.normalize(Point::new(-50.0, 150.0)), Point::new(-0.5, 1.5));
    }

    #[test]
    fn normalize_empty_box_falls_back_to_zero() {
        assert_eq!(r(5.0, 5.0, 0.0, 10.0).normalize(Point::new(7.0, 7.0)), Point::zero());
        assert_eq!(r(5.0, 5.0, 10.0, 0.0).normalize(Point::new(7.0, 7.0)), Point::zero());
    }

    #[test]
    fn normalize_non_finite_input_falls_back_to_zero() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.normalize(Point::new(f32::NAN, 1.0)), Point::zero());
    }
}
