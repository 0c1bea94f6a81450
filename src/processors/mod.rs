//! Geometry processing for document elements.
//!
//! This module holds the geometric primitives shared across parsing, editing,
//! and rendering: points, bounding boxes, and the margin-adjustment math used
//! when a user tweaks a region before re-parsing it.

pub mod geometry;

pub use geometry::{BoundingBox, Point};
