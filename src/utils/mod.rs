//! Utility functions and helpers for tgcached.
//!
//! # Submodules
//!
//! - `logging`: Tracing subscriber initialization for the command-line tool.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
