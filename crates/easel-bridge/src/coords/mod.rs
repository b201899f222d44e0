//! Coordinate types shared by the surface, pointer and drag/drop paths.
//!
//! Three spaces are in play:
//! - client: host viewport pixels, as reported by raw pointer events
//! - logical: layout pixels, the space `Surface::resize` is expressed in
//! - physical: backing-buffer pixels (`logical × device pixel ratio`)
//!
//! All components deliver logical coordinates to the UI core.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::ClientRect;
pub use size::{PhysicalSize, Size};
