//! # Engine Module
//!
//! The transformation engine: the tasks that tile, rotate, cut, dope and check unit cells,
//! together with their configuration, error types and progress reporting.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Tunable constants, a validating builder and TOML loading
//! - **Error Handling** ([`error`]) - Transform errors and non-fatal warnings
//! - **Progress Monitoring** ([`progress`]) - Optional callback for stage events
//! - **Tasks** ([`tasks`]) - The pure transforms over atom lists
//!
//! Every task takes its atoms by slice and returns a new list; no task mutates its input or
//! holds state between calls.

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
