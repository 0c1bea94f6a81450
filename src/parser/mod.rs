//! Document parsing over the external partitioning engine.
//!
//! This module owns the boundary to the third-party partitioning backend and
//! everything that shapes its output: element and document records, folder
//! discovery, batch parsing with per-file failure isolation, and region
//! re-parsing through a scoped temporary crop.

pub mod discovery;
pub mod document;
pub mod engine;

pub use discovery::discover_documents;
pub use document::{Element, ParsedDocument, parse_document, parse_folder, parse_region};
pub use engine::PartitionEngine;
