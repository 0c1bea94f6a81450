//! Overlay rendering and color palettes.
//!
//! This module draws the bounding-box overlays that visualize extracted
//! elements on top of the source image, formats the matching text listing,
//! and owns the named category-to-color palettes.

pub mod overlay;
pub mod palette;

pub use overlay::{OverlayStyle, annotate, compare_boxes, formatted_text, side_by_side};
pub use palette::{ColorScheme, DEFAULT_SCHEME, FALLBACK_COLOR};
