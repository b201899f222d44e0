//! Easel bridge crate.
//!
//! Sits between a host windowing/event environment and a platform-agnostic
//! UI core. Owns the drawable surface, normalizes pointer, keyboard, focus,
//! wheel and file input into the [`core::UiCore`] vocabulary, and drives a
//! cancellable redraw loop.

pub mod coords;
pub mod core;
pub mod host;
pub mod ingest;
pub mod input;
pub mod logging;
pub mod schedule;
pub mod surface;
pub mod time;

mod bridge;

pub use bridge::{Bridge, BridgeConfig, PointerModeSelection, RasterTarget};

#[cfg(test)]
mod test_support;
