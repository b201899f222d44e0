//! File ingestion.
//!
//! Two entry points end in the same shape: the explicit picker (a hidden,
//! single-owner selection control) and drag-and-drop onto the surface. Both
//! read every file of a batch concurrently and deliver once, in input order.

mod drag;
mod file;
mod join;
mod picker;

pub use drag::DropBatch;
pub use file::{FileBytes, FileOutcome, HostFile, IngestedFile, ReadError, ReadFuture, read_batch};
pub use join::{JoinAll, join_all};
pub use picker::{
    FilePicker, PickerCallback, PickerControl, PickerOptions, PickerSubscription, SubscriptionState,
};

pub(crate) use drag::handle_drag;
