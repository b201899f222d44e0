//! Frame timing.
//!
//! Timestamps come from the host's display-refresh callback (milliseconds on
//! a monotonic clock), so the clock never reads a system time source itself.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
