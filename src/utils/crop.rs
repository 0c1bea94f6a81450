//! Bounding box based image cropping.

use crate::core::{ScanViewError, ScanViewResult};
use crate::processors::BoundingBox;
use image::{RgbImage, imageops};

/// Crops an image to the axis-aligned bounding rectangle of a polygon.
///
/// Negative coordinates are clamped to the image origin and coordinates past
/// the image edge are clamped to the image bounds. Empty polygons and regions
/// that clamp down to zero width or height are rejected.
pub fn crop_bounding_box(image: &RgbImage, bbox: &BoundingBox) -> ScanViewResult<RgbImage> {
    if bbox.is_empty() {
        return Err(ScanViewError::invalid_input("empty bounding box"));
    }

    let (min_x, min_y, max_x, max_y) = bbox.bounding_rect();

    // Convert to integer pixel coordinates within the image.
    let x1 = (min_x.max(0.0) as u32).min(image.width().saturating_sub(1));
    let y1 = (min_y.max(0.0) as u32).min(image.height().saturating_sub(1));
    let x2 = (max_x as u32).min(image.width());
    let y2 = (max_y as u32).min(image.height());

    if x2 <= x1 || y2 <= y1 {
        return Err(ScanViewError::invalid_input(format!(
            "invalid crop region: ({x1}, {y1}) to ({x2}, {y2})"
        )));
    }

    // Zero-copy view, materialized once.
    Ok(imageops::crop_imm(image, x1, y1, x2 - x1, y2 - y1).to_image())
}
