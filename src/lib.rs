//! # scanview
//!
//! Core library for viewing and correcting machine-extracted text on scanned
//! document images.
//!
//! The extraction itself (OCR, layout analysis, table structure) is delegated
//! to an external document-partitioning backend behind the
//! [`PartitionEngine`] trait. This crate provides everything around that
//! boundary:
//!
//! - **Parsing** ([`parser`]) - folder discovery, whole-image partitioning
//!   into [`ParsedDocument`] records, and region re-parsing through a scoped
//!   temporary crop.
//! - **Geometry** ([`processors`]) - bounding-box margin adjustment with
//!   image-bounds clamping, used when a user tweaks a region before
//!   re-parsing it.
//! - **Edit tracking** ([`editing`]) - per-document original/working-copy
//!   snapshots with relabeling, text replacement, diff summaries, and reset.
//! - **Rendering** ([`render`]) - category-colored, semi-transparent
//!   bounding-box overlays, ordinal labels, box-comparison previews, and the
//!   formatted text listing.
//! - **Sessions** ([`session`]) - in-memory state for one user's interaction
//!   sequence over a set of documents.
//! - **Export** ([`export`]) - plain-text and annotated-PNG downloads.
//!
//! # Example
//!
//! ```no_run
//! use scanview::prelude::*;
//! use std::path::Path;
//!
//! # struct MyEngine;
//! # impl PartitionEngine for MyEngine {
//! #     fn partition(&self, _: &Path) -> ScanViewResult<Vec<Element>> { Ok(vec![]) }
//! # }
//! # fn main() -> ScanViewResult<()> {
//! let engine = MyEngine;
//! let session = DocumentSession::load(&engine, Path::new("data"))?;
//!
//! if let Some(doc) = session.document("scan_001.tiff") {
//!     let image = scanview::utils::load_image(&doc.filepath)?;
//!     let style = OverlayStyle::default();
//!     let scheme = ColorScheme::named("Default");
//!     let (annotated, text) = side_by_side(&image, &doc.elements, &style, scheme);
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod editing;
pub mod export;
pub mod parser;
pub mod processors;
pub mod render;
pub mod session;
pub mod utils;

pub use crate::core::{ScanViewError, ScanViewResult};
pub use editing::EditTracker;
pub use parser::{Element, ParsedDocument, PartitionEngine};
pub use processors::{BoundingBox, Point};
pub use render::{ColorScheme, OverlayStyle};
pub use session::DocumentSession;

/// Commonly used imports for hosts embedding the viewer core.
pub mod prelude {
    pub use crate::core::{ScanViewError, ScanViewResult};
    pub use crate::editing::EditTracker;
    pub use crate::export::{annotated_png, document_text, image_export_name, text_export_name};
    pub use crate::parser::{
        Element, ParsedDocument, PartitionEngine, discover_documents, parse_document,
        parse_folder, parse_region,
    };
    pub use crate::processors::{BoundingBox, Point};
    pub use crate::render::{
        ColorScheme, OverlayStyle, annotate, compare_boxes, formatted_text, side_by_side,
    };
    pub use crate::session::DocumentSession;
}
