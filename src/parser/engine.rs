//! Partitioning-engine boundary.
//!
//! Text and layout extraction is not implemented in this crate. It is
//! delegated to an external document-partitioning library behind the
//! [`PartitionEngine`] trait, so hosts can plug in whichever backend they
//! ship with (an OCR pipeline, a vision-language model, a remote service).
//! The rest of the crate only shapes the engine's output.

use crate::core::ScanViewResult;
use crate::parser::Element;
use std::path::Path;

/// A pluggable document-partitioning backend.
///
/// Implementations take a path to an image on disk and return the extracted
/// elements in reading order. Coordinates, when present, are polygons in the
/// source image's pixel coordinate system.
pub trait PartitionEngine {
    /// Partitions a whole image into categorized elements.
    ///
    /// # Arguments
    ///
    /// * `image_path` - Path to the image to partition
    ///
    /// # Returns
    ///
    /// The extracted elements in reading order, or an error if the engine
    /// could not process the image.
    fn partition(&self, image_path: &Path) -> ScanViewResult<Vec<Element>>;
}
