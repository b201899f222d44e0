//! Redraw scheduling.
//!
//! The scheduler keeps exactly one display-refresh request in flight while the
//! surface is alive: every frame re-arms the next one before returning, and a
//! [`CancelToken`] checked before each re-arm lets teardown stop the loop.

mod redraw;

pub use redraw::{CancelToken, RedrawScheduler, SchedulerState};
