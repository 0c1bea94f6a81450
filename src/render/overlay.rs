//! Overlay rendering for extracted elements.
//!
//! Draws colored, semi-transparent polygon outlines (and optional ordinal
//! labels) for a set of elements onto a copy of the source image, and formats
//! the matching text listing. Drawing happens on a transparent RGBA layer the
//! size of the source which is then alpha-composited onto the source; the
//! result comes back as plain RGB.

use crate::parser::Element;
use crate::processors::BoundingBox;
use crate::render::palette::ColorScheme;
use ab_glyph::FontVec;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

/// Width of the dash separator between elements in the formatted text.
const SEPARATOR_WIDTH: usize = 50;

/// Font scale for ordinal labels.
const LABEL_SCALE: f32 = 20.0;

/// Font scale for the original/adjusted labels in box comparisons.
const COMPARE_LABEL_SCALE: f32 = 16.0;

/// Rendering knobs for [`annotate`].
#[derive(Debug, Clone, Copy)]
pub struct OverlayStyle {
    /// Outline thickness in pixels.
    pub box_width: u32,
    /// Outline opacity in `[0, 1]`.
    pub opacity: f32,
    /// Whether to draw 1-based ordinal labels at each box's first vertex.
    pub show_numbers: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            box_width: 7,
            opacity: 0.7,
            show_numbers: true,
        }
    }
}

/// Draws bounding-box overlays for `elements` onto a copy of `image`.
///
/// Each element with coordinates gets its polygon outline in the palette
/// color for its category; elements without coordinates are skipped. The
/// 1-based ordinal always reflects the element's position in the full list,
/// so numbering stays in sync with [`formatted_text`]. Ordinal labels are
/// drawn as white text over a filled rectangle in the element color; when no
/// system font can be found the labels are skipped and a warning is logged.
pub fn annotate(
    image: &RgbImage,
    elements: &[Element],
    style: &OverlayStyle,
    scheme: &ColorScheme,
) -> RgbImage {
    let mut overlay = RgbaImage::new(image.width(), image.height());
    let alpha = (255.0 * style.opacity.clamp(0.0, 1.0)).round() as u8;

    let font = if style.show_numbers {
        let font = load_font();
        if font.is_none() {
            tracing::warn!("no system font found; element numbers will not be drawn");
        }
        font
    } else {
        None
    };

    for (idx, element) in elements.iter().enumerate() {
        let Some(coordinates) = &element.coordinates else {
            continue;
        };
        if coordinates.is_empty() {
            continue;
        }

        let Rgb([r, g, b]) = scheme.color_for(&element.category);
        let color = Rgba([r, g, b, alpha]);

        draw_polygon_outline(
            &mut overlay,
            &coordinates
                .iter()
                .map(|p| (p.x, p.y))
                .collect::<Vec<_>>(),
            style.box_width,
            color,
        );

        if let Some(font) = &font {
            let label = (idx + 1).to_string();
            let (x, y) = (coordinates[0].x as i32, coordinates[0].y as i32);
            let (text_w, text_h) = text_size(LABEL_SCALE, font, &label);
            draw_filled_rect_mut(
                &mut overlay,
                Rect::at(x, y).of_size(text_w.max(1), text_h.max(1)),
                color,
            );
            draw_text_mut(
                &mut overlay,
                Rgba([255, 255, 255, 255]),
                x,
                y,
                LABEL_SCALE,
                font,
                &label,
            );
        }
    }

    composite(image, &overlay)
}

/// Formats the element listing that accompanies an annotated image.
///
/// Every element appears in order, coordinates or not: an optional `[n]`
/// ordinal plus the category, the element text, then a fixed-width dash
/// separator, all joined by newlines.
pub fn formatted_text(elements: &[Element], show_numbers: bool) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut parts = Vec::with_capacity(elements.len() * 3);
    for (idx, element) in elements.iter().enumerate() {
        if show_numbers {
            parts.push(format!("[{}] {}", idx + 1, element.category));
        } else {
            parts.push(element.category.clone());
        }
        parts.push(element.text.clone());
        parts.push(separator.clone());
    }
    parts.join("\n")
}

/// Produces the annotated image / formatted text pair for side-by-side
/// display.
pub fn side_by_side(
    image: &RgbImage,
    elements: &[Element],
    style: &OverlayStyle,
    scheme: &ColorScheme,
) -> (RgbImage, String) {
    let annotated = annotate(image, elements, style, scheme);
    let text = formatted_text(elements, style.show_numbers);
    (annotated, text)
}

/// Draws an original and an adjusted bounding box on the full image for
/// preview during region adjustment.
///
/// The original box is red, the adjusted box green with an outline one unit
/// thicker, each with a text label above its first vertex.
pub fn compare_boxes(
    image: &RgbImage,
    original: &BoundingBox,
    adjusted: &BoundingBox,
    box_width: u32,
) -> RgbImage {
    let mut overlay = RgbaImage::new(image.width(), image.height());

    let red = Rgba([255, 0, 0, 180]);
    let green = Rgba([0, 255, 0, 180]);

    let original_points: Vec<_> = original.points.iter().map(|p| (p.x, p.y)).collect();
    let adjusted_points: Vec<_> = adjusted.points.iter().map(|p| (p.x, p.y)).collect();
    draw_polygon_outline(&mut overlay, &original_points, box_width, red);
    draw_polygon_outline(&mut overlay, &adjusted_points, box_width + 1, green);

    if let Some(font) = load_font() {
        if let Some(&(x, y)) = original_points.first() {
            draw_text_mut(
                &mut overlay,
                Rgba([255, 0, 0, 255]),
                x as i32,
                y as i32 - 20,
                COMPARE_LABEL_SCALE,
                &font,
                "Original",
            );
        }
        if let Some(&(x, y)) = adjusted_points.first() {
            draw_text_mut(
                &mut overlay,
                Rgba([0, 255, 0, 255]),
                x as i32,
                y as i32 - 20,
                COMPARE_LABEL_SCALE,
                &font,
                "Adjusted",
            );
        }
    }

    composite(image, &overlay)
}

/// Alpha-composites the overlay layer onto the RGBA-converted source and
/// returns the opaque result.
fn composite(image: &RgbImage, overlay: &RgbaImage) -> RgbImage {
    let mut base = DynamicImage::ImageRgb8(image.clone()).to_rgba8();
    image::imageops::overlay(&mut base, overlay, 0, 0);
    DynamicImage::ImageRgba8(base).to_rgb8()
}

/// Draws a closed polygon outline with the given line thickness.
///
/// Each edge is drawn as a bundle of parallel line segments offset along the
/// edge normal, which matches how thick outlines look for the axis-aligned
/// boxes the partitioning engine produces. Single-point polygons have no
/// edges and draw nothing.
fn draw_polygon_outline(canvas: &mut RgbaImage, points: &[(f32, f32)], width: u32, color: Rgba<u8>) {
    if points.len() < 2 || width == 0 {
        return;
    }

    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        draw_thick_segment(canvas, a, b, width, color);
    }
}

fn draw_thick_segment(
    canvas: &mut RgbaImage,
    a: (f32, f32),
    b: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        draw_line_segment_mut(canvas, a, b, color);
        return;
    }

    // Unit normal to the segment; offsets are centered so the nominal edge
    // stays in the middle of the band.
    let (nx, ny) = (-dy / len, dx / len);
    let center = (width.saturating_sub(1)) as f32 / 2.0;
    for i in 0..width {
        let off = i as f32 - center;
        draw_line_segment_mut(
            canvas,
            (a.0 + nx * off, a.1 + ny * off),
            (b.0 + nx * off, b.1 + ny * off),
            color,
        );
    }
}

/// Tries to load a system font for label rendering.
///
/// Checks a few well-known font locations; returns `None` when none exists,
/// in which case callers skip text labels.
fn load_font() -> Option<FontVec> {
    let font_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in &font_paths {
        if let Ok(font_data) = std::fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(font_data) {
                return Some(font);
            }
        }
    }

    None
}
