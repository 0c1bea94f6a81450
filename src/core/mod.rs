//! The core module of the scanview crate.
//!
//! This module contains the fundamental components shared by the rest of the
//! crate, currently error handling. It re-exports the commonly used types for
//! convenience.

pub mod errors;

pub use errors::{ScanViewError, ScanViewResult};
