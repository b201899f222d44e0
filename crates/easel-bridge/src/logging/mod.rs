//! Logging utilities.
//!
//! The bridge only emits through the `log` facade. This module installs an
//! `env_logger` backend for native embedders and test harnesses; browser
//! hosts install their own console logger instead.

mod init;

pub use init::{LoggingConfig, init_logging};
