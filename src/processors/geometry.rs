//! Geometric primitives for scanned-document elements.
//!
//! This module provides the point and bounding-box types used throughout the
//! viewer core, along with the margin-adjustment math behind the region
//! re-parse workflow. Extracted elements carry arbitrary polygons; for
//! adjustment and cropping purposes only the axis-aligned bounding rectangle
//! of the polygon is meaningful.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box represented by a collection of points.
///
/// The points usually form a quadrilateral straight from the partitioning
/// engine, but any non-empty polygon is accepted; operations that need a
/// rectangle work on the polygon's axis-aligned bounding rect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// The points that define the bounding box.
    pub points: Vec<Point>,
}

impl BoundingBox {
    /// Creates a new bounding box from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates an axis-aligned bounding box from corner coordinates.
    ///
    /// The resulting box has the 4 corners in top-left, top-right,
    /// bottom-right, bottom-left order.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        Self { points }
    }

    /// Returns true if the box has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the axis-aligned bounding rectangle of the polygon as
    /// `(min_x, min_y, max_x, max_y)`.
    ///
    /// Returns `(0, 0, 0, 0)` for an empty box.
    pub fn bounding_rect(&self) -> (f32, f32, f32, f32) {
        if self.points.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        let min_x = self.points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = self
            .points
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max);
        let min_y = self.points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = self
            .points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max);
        (min_x, min_y, max_x, max_y)
    }

    /// Expands or contracts the box's margins and clamps the result to the
    /// image bounds.
    ///
    /// Positive adjustments expand the corresponding edge outward, negative
    /// adjustments contract it. The result is always the 4 corners of an
    /// axis-aligned rectangle in top-left, top-right, bottom-right,
    /// bottom-left order, with every coordinate inside
    /// `[0, image_width] x [0, image_height]`.
    ///
    /// Over-contraction never produces an inverted rectangle: each max edge
    /// is clamped to stay at or beyond the matching min edge, so the worst
    /// case is a zero-size box.
    ///
    /// # Arguments
    ///
    /// * `left` - Pixels to expand the left edge (negative to contract)
    /// * `right` - Pixels to expand the right edge (negative to contract)
    /// * `top` - Pixels to expand the top edge (negative to contract)
    /// * `bottom` - Pixels to expand the bottom edge (negative to contract)
    /// * `image_width` - Image width used for boundary clamping
    /// * `image_height` - Image height used for boundary clamping
    pub fn adjust_margins(
        &self,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
        image_width: u32,
        image_height: u32,
    ) -> BoundingBox {
        let (min_x, min_y, max_x, max_y) = self.bounding_rect();
        let width = image_width as f32;
        let height = image_height as f32;

        let new_min_x = (min_x - left as f32).clamp(0.0, width);
        let new_max_x = (max_x + right as f32).clamp(0.0, width).max(new_min_x);
        let new_min_y = (min_y - top as f32).clamp(0.0, height);
        let new_max_y = (max_y + bottom as f32).clamp(0.0, height).max(new_min_y);

        BoundingBox::from_coords(new_min_x, new_min_y, new_max_x, new_max_y)
    }

    /// Returns the integer-truncated `(width, height)` of the polygon's
    /// bounding rectangle.
    pub fn size(&self) -> (u32, u32) {
        let (min_x, min_y, max_x, max_y) = self.bounding_rect();
        ((max_x - min_x) as u32, (max_y - min_y) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box() -> BoundingBox {
        BoundingBox::new(vec![
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(300.0, 200.0),
            Point::new(100.0, 200.0),
        ])
    }

    fn corners(bbox: &BoundingBox) -> Vec<(f32, f32)> {
        bbox.points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_adjust_margins_expand_horizontally() {
        let adjusted = sample_box().adjust_margins(10, 10, 0, 0, 400, 300);
        assert_eq!(
            corners(&adjusted),
            vec![
                (90.0, 100.0),
                (310.0, 100.0),
                (310.0, 200.0),
                (90.0, 200.0)
            ]
        );
    }

    #[test]
    fn test_adjust_margins_zero_is_noop() {
        let bbox = sample_box();
        let adjusted = bbox.adjust_margins(0, 0, 0, 0, 400, 300);
        assert_eq!(adjusted.bounding_rect(), bbox.bounding_rect());
    }

    #[test]
    fn test_adjust_margins_clamps_to_image_bounds() {
        let adjusted = sample_box().adjust_margins(-2000, 0, 0, 0, 400, 300);
        let (min_x, _, _, _) = adjusted.bounding_rect();
        assert_eq!(min_x, 0.0);

        let adjusted = sample_box().adjust_margins(500, 500, 500, 500, 400, 300);
        let (min_x, min_y, max_x, max_y) = adjusted.bounding_rect();
        assert_eq!((min_x, min_y), (0.0, 0.0));
        assert_eq!((max_x, max_y), (400.0, 300.0));
    }

    #[test]
    fn test_adjust_margins_over_contraction_degenerates_to_zero_size() {
        // Contract far beyond the box extent on both axes; the result must
        // never invert.
        let adjusted = sample_box().adjust_margins(-5000, -5000, -5000, -5000, 400, 300);
        let (min_x, min_y, max_x, max_y) = adjusted.bounding_rect();
        assert!(max_x >= min_x);
        assert!(max_y >= min_y);
        let (w, h) = adjusted.size();
        assert_eq!((w, h), (0, 0));
    }

    #[test]
    fn test_adjust_margins_preserves_winding_order() {
        let adjusted = sample_box().adjust_margins(5, 5, 5, 5, 400, 300);
        let pts = &adjusted.points;
        assert_eq!(pts.len(), 4);
        // TL, TR, BR, BL
        assert!(pts[0].x < pts[1].x && pts[0].y == pts[1].y);
        assert!(pts[1].y < pts[2].y && pts[1].x == pts[2].x);
        assert!(pts[3].x < pts[2].x && pts[3].y == pts[2].y);
    }

    #[test]
    fn test_size_uses_bounding_rect_of_polygon() {
        let bbox = BoundingBox::new(vec![
            Point::new(20.0, 30.0),
            Point::new(60.0, 10.0),
            Point::new(80.0, 50.0),
            Point::new(40.0, 70.0),
            Point::new(10.0, 40.0),
        ]);
        assert_eq!(bbox.size(), (70, 60));
    }

    #[test]
    fn test_size_truncates_fractions() {
        let bbox = BoundingBox::from_coords(0.0, 0.0, 10.7, 5.2);
        assert_eq!(bbox.size(), (10, 5));
    }

    #[test]
    fn test_bounding_rect_of_empty_box() {
        let bbox = BoundingBox::new(vec![]);
        assert_eq!(bbox.bounding_rect(), (0.0, 0.0, 0.0, 0.0));
        assert!(bbox.is_empty());
    }

    #[test]
    fn test_adjust_margins_single_point() {
        let bbox = BoundingBox::new(vec![Point::new(50.0, 50.0)]);
        let adjusted = bbox.adjust_margins(10, 10, 10, 10, 100, 100);
        assert_eq!(adjusted.bounding_rect(), (40.0, 40.0, 60.0, 60.0));
        assert_eq!(adjusted.size(), (20, 20));
    }
}
