//! Utility functions for the viewer core.
//!
//! This module provides image loading, bounding-box cropping, and logging
//! setup used throughout the crate.

pub mod crop;
pub mod image;
pub mod logging;

pub use crop::crop_bounding_box;
pub use image::{image_dimensions, load_image};
pub use logging::init_tracing;
