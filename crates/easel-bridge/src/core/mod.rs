//! UI core contract.
//!
//! This module defines the narrow interface between the bridge and the
//! platform-agnostic UI core: normalized input in, draw calls out.

mod frame;
mod ui_core;
mod view;

pub use frame::Frame;
pub use ui_core::UiCore;
pub use view::View;
