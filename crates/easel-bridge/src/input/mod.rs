//! Input normalization.
//!
//! Public API is host-agnostic: host adapters produce `HostEvent`s, this
//! module turns them into UI-core calls in logical coordinates.

mod keyboard;
mod pointer;
mod types;

pub use keyboard::KeyboardTracker;
pub use pointer::{PointerAction, PointerMode, PointerUnifier};
pub use types::{Key, Modifiers, MouseButton, NamedKey};

pub(crate) use pointer::dispatch as dispatch_pointer;
