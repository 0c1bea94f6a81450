//! Document parsing built on top of the partitioning-engine boundary.
//!
//! The functions here turn raw engine output into [`ParsedDocument`] records,
//! batch over whole folders with per-file failure isolation, and re-run
//! extraction on a cropped sub-region of an image.

use crate::core::{ScanViewError, ScanViewResult};
use crate::parser::discovery::discover_documents;
use crate::parser::engine::PartitionEngine;
use crate::processors::{BoundingBox, Point};
use crate::utils::crop_bounding_box;
use crate::utils::load_image;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Separator between element texts in a document's `full_text`.
const FULL_TEXT_SEPARATOR: &str = "\n\n";

/// One extracted content unit: a category label, its text, and an optional
/// bounding polygon in image pixel coordinates.
///
/// Elements compare structurally, which is what the edit tracker relies on
/// for diffing a working copy against the original snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    /// Coarse classification label (e.g. "Title", "NarrativeText", "Table").
    #[serde(rename = "type")]
    pub category: String,
    /// The extracted text.
    pub text: String,
    /// Bounding polygon, when the engine reports one.
    pub coordinates: Option<Vec<Point>>,
}

impl Element {
    /// Creates an element with a bounding polygon.
    pub fn new(
        category: impl Into<String>,
        text: impl Into<String>,
        coordinates: Option<Vec<Point>>,
    ) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
            coordinates,
        }
    }

    /// Returns the element's bounding polygon as a [`BoundingBox`], if present.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.coordinates
            .as_ref()
            .map(|points| BoundingBox::new(points.clone()))
    }
}

/// The immutable parse baseline for one source image.
///
/// Created once per document at load time and re-created wholesale on reload;
/// edits never touch it. The edit tracker snapshots `elements` into its own
/// working copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedDocument {
    /// File name of the source image (no directory components).
    pub filename: String,
    /// Full path to the source image.
    pub filepath: PathBuf,
    /// Extracted elements in reading order.
    pub elements: Vec<Element>,
    /// All element texts joined with blank lines.
    pub full_text: String,
}

/// Partitions a single image into a [`ParsedDocument`].
pub fn parse_document(
    engine: &dyn PartitionEngine,
    image_path: &Path,
) -> ScanViewResult<ParsedDocument> {
    let elements = engine.partition(image_path)?;
    let full_text = elements
        .iter()
        .map(|element| element.text.as_str())
        .collect::<Vec<_>>()
        .join(FULL_TEXT_SEPARATOR);

    let filename = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| image_path.display().to_string());

    tracing::debug!(
        file = %filename,
        elements = elements.len(),
        "partitioned document"
    );

    Ok(ParsedDocument {
        filename,
        filepath: image_path.to_path_buf(),
        elements,
        full_text,
    })
}

/// Partitions every document in a folder, keyed by file name.
///
/// A missing folder is a hard error. Individual parse failures are logged and
/// skipped so one bad file does not abort the batch; the map is ordered by
/// file name.
pub fn parse_folder(
    engine: &dyn PartitionEngine,
    folder: &Path,
) -> ScanViewResult<BTreeMap<String, ParsedDocument>> {
    let files = discover_documents(folder)?;
    if files.is_empty() {
        tracing::info!(folder = %folder.display(), "no documents found");
        return Ok(BTreeMap::new());
    }

    let mut results = BTreeMap::new();
    for path in &files {
        match parse_document(engine, path) {
            Ok(document) => {
                results.insert(document.filename.clone(), document);
            }
            Err(err) => {
                tracing::warn!(
                    file = %path.display(),
                    error = %err,
                    "skipping document that failed to parse"
                );
            }
        }
    }

    tracing::info!(
        folder = %folder.display(),
        parsed = results.len(),
        total = files.len(),
        "parsed document folder"
    );
    Ok(results)
}

/// Re-runs extraction on a sub-region of an image.
///
/// The region is the axis-aligned bounding rect of `coordinates`, clamped to
/// the image. The crop is written to a scoped temporary `.tiff` which the
/// engine partitions; fragment texts are joined with newlines. The temporary
/// file is removed on every exit path, including when the engine fails.
pub fn parse_region(
    engine: &dyn PartitionEngine,
    image_path: &Path,
    coordinates: &BoundingBox,
) -> ScanViewResult<String> {
    let image = load_image(image_path)?;
    let cropped = crop_bounding_box(&image, coordinates)?;

    // NamedTempFile deletes the file on drop, which covers the engine
    // failure path as well.
    let tmp = tempfile::Builder::new()
        .prefix("scanview-region-")
        .suffix(".tiff")
        .tempfile()?;
    cropped
        .save(tmp.path())
        .map_err(ScanViewError::ImageEncode)?;

    let elements = engine.partition(tmp.path())?;
    let text = elements
        .iter()
        .map(|element| element.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        file = %image_path.display(),
        fragments = elements.len(),
        "re-parsed region"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::cell::RefCell;

    /// Engine stub returning canned elements, recording the paths it was
    /// handed.
    pub(crate) struct StubEngine {
        pub elements: Vec<Element>,
        pub fail_on: Option<String>,
        pub seen_paths: RefCell<Vec<PathBuf>>,
    }

    impl StubEngine {
        pub fn returning(elements: Vec<Element>) -> Self {
            Self {
                elements,
                fail_on: None,
                seen_paths: RefCell::new(Vec::new()),
            }
        }
    }

    impl PartitionEngine for StubEngine {
        fn partition(&self, image_path: &Path) -> ScanViewResult<Vec<Element>> {
            self.seen_paths.borrow_mut().push(image_path.to_path_buf());
            if let Some(pattern) = &self.fail_on {
                if image_path.to_string_lossy().contains(pattern.as_str()) {
                    return Err(ScanViewError::partition_error(
                        image_path,
                        "engine rejected image",
                        std::io::Error::other("unreadable scan"),
                    ));
                }
            }
            Ok(self.elements.clone())
        }
    }

    fn sample_elements() -> Vec<Element> {
        vec![
            Element::new(
                "Title",
                "Quarterly Report",
                Some(vec![
                    Point::new(10.0, 10.0),
                    Point::new(90.0, 10.0),
                    Point::new(90.0, 20.0),
                    Point::new(10.0, 20.0),
                ]),
            ),
            Element::new("NarrativeText", "Revenue grew in all segments.", None),
        ]
    }

    fn write_blank_tiff(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_parse_document_joins_full_text_with_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.tiff");
        write_blank_tiff(&path, 100, 50);

        let engine = StubEngine::returning(sample_elements());
        let doc = parse_document(&engine, &path).unwrap();

        assert_eq!(doc.filename, "scan.tiff");
        assert_eq!(doc.filepath, path);
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(
            doc.full_text,
            "Quarterly Report\n\nRevenue grew in all segments."
        );
    }

    #[test]
    fn test_parse_folder_skips_failing_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["good_a.tiff", "bad.tiff", "good_b.tiff"] {
            write_blank_tiff(&dir.path().join(name), 40, 40);
        }

        let mut engine = StubEngine::returning(sample_elements());
        engine.fail_on = Some("bad".to_string());

        let results = parse_folder(&engine, dir.path()).unwrap();
        let names: Vec<_> = results.keys().cloned().collect();
        assert_eq!(names, vec!["good_a.tiff", "good_b.tiff"]);
    }

    #[test]
    fn test_parse_folder_missing_folder_surfaces_error() {
        let engine = StubEngine::returning(Vec::new());
        let err = parse_folder(&engine, Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ScanViewError::FolderNotFound { .. }));
    }

    #[test]
    fn test_parse_region_crops_and_joins_fragments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.tiff");
        write_blank_tiff(&path, 200, 100);

        let engine = StubEngine::returning(vec![
            Element::new("NarrativeText", "first line", None),
            Element::new("NarrativeText", "second line", None),
        ]);

        let region = BoundingBox::from_coords(20.0, 10.0, 120.0, 60.0);
        let text = parse_region(&engine, &path, &region).unwrap();
        assert_eq!(text, "first line\nsecond line");

        // The engine was handed a temporary crop, not the original file, and
        // the temp file is gone afterwards.
        let seen = engine.seen_paths.borrow();
        assert_eq!(seen.len(), 1);
        assert_ne!(seen[0], path);
        assert!(!seen[0].exists());
    }

    #[test]
    fn test_parse_region_engine_failure_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.tiff");
        write_blank_tiff(&path, 100, 100);

        let mut engine = StubEngine::returning(Vec::new());
        engine.fail_on = Some("scanview-region-".to_string());

        let region = BoundingBox::from_coords(0.0, 0.0, 50.0, 50.0);
        let err = parse_region(&engine, &path, &region).unwrap_err();
        assert!(matches!(err, ScanViewError::Partition { .. }));

        let seen = engine.seen_paths.borrow();
        assert_eq!(seen.len(), 1);
        assert!(!seen[0].exists());
    }

    #[test]
    fn test_parse_region_rejects_degenerate_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.tiff");
        write_blank_tiff(&path, 100, 100);

        let engine = StubEngine::returning(Vec::new());
        let region = BoundingBox::from_coords(30.0, 30.0, 30.0, 30.0);
        let err = parse_region(&engine, &path, &region).unwrap_err();
        assert!(matches!(err, ScanViewError::InvalidInput { .. }));
        assert!(engine.seen_paths.borrow().is_empty());
    }

    #[test]
    fn test_element_serializes_category_as_type() {
        let element = Element::new("Title", "Heading", None);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "Title");
        assert_eq!(json["text"], "Heading");
        assert!(json["coordinates"].is_null());
    }
}
