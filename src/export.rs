//! Export surface for document text and annotated images.
//!
//! Hosts hand out two downloads per document: the current element texts as a
//! plain-text file and the current annotated image as PNG. File names derive
//! from the source file's stem with fixed suffixes.

use crate::core::{ScanViewError, ScanViewResult};
use crate::parser::Element;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Suffix for exported text files.
const TEXT_SUFFIX: &str = "_extracted.txt";

/// Suffix for exported annotated images.
const IMAGE_SUFFIX: &str = "_annotated.png";

/// Joins the current element texts with a blank line between elements.
pub fn document_text(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| element.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Encodes an annotated image as a PNG byte stream.
pub fn annotated_png(image: &RgbImage) -> ScanViewResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(ScanViewError::ImageEncode)?;
    Ok(buffer.into_inner())
}

/// Export file name for a document's extracted text.
pub fn text_export_name(filename: &str) -> String {
    format!("{}{}", stem(filename), TEXT_SUFFIX)
}

/// Export file name for a document's annotated image.
pub fn image_export_name(filename: &str) -> String {
    format!("{}{}", stem(filename), IMAGE_SUFFIX)
}

/// Writes an annotated image into `output_folder`, creating the folder as
/// needed, and returns the path written.
pub fn save_annotated_image(
    image: &RgbImage,
    original_filename: &str,
    output_folder: &Path,
) -> ScanViewResult<PathBuf> {
    std::fs::create_dir_all(output_folder)?;
    let output_path = output_folder.join(image_export_name(original_filename));
    image
        .save(&output_path)
        .map_err(ScanViewError::ImageEncode)?;
    Ok(output_path)
}

fn stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| filename.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_document_text_joins_with_blank_lines() {
        let elements = vec![
            Element::new("Title", "Heading", None),
            Element::new("NarrativeText", "Body", None),
            Element::new("Footer", "Page 1", None),
        ];
        assert_eq!(document_text(&elements), "Heading\n\nBody\n\nPage 1");
    }

    #[test]
    fn test_document_text_empty() {
        assert_eq!(document_text(&[]), "");
    }

    #[test]
    fn test_annotated_png_produces_png_bytes() {
        let img = RgbImage::from_pixel(16, 16, Rgb([10, 20, 30]));
        let bytes = annotated_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_export_names_use_source_stem() {
        assert_eq!(text_export_name("scan_001.tiff"), "scan_001_extracted.txt");
        assert_eq!(image_export_name("scan_001.tiff"), "scan_001_annotated.png");
        assert_eq!(image_export_name("no_extension"), "no_extension_annotated.png");
    }

    #[test]
    fn test_save_annotated_image_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output").join("annotated");
        let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));

        let path = save_annotated_image(&img, "page.tiff", &output).unwrap();
        assert_eq!(path, output.join("page_annotated.png"));
        assert!(path.exists());
    }
}
