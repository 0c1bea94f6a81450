//! Per-user session state for an interaction sequence.
//!
//! A [`DocumentSession`] owns the parsed documents for one user's interaction
//! sequence plus their edit trackers. Hosts keep one session per user;
//! isolating concurrent users is the hosting application's concern. All
//! operations run to completion before the next user action is processed,
//! so there is no interior locking.

use crate::core::ScanViewResult;
use crate::editing::EditTracker;
use crate::parser::{ParsedDocument, PartitionEngine, parse_folder, parse_region};
use crate::processors::BoundingBox;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// In-memory state for one user's documents and edits.
///
/// Documents are the immutable parse baselines; edit trackers are created
/// lazily the first time a document is viewed and discarded wholesale on
/// reload.
#[derive(Debug, Default)]
pub struct DocumentSession {
    documents: BTreeMap<String, ParsedDocument>,
    edits: HashMap<String, EditTracker>,
}

impl DocumentSession {
    /// Parses every document in `folder` into a fresh session.
    pub fn load(engine: &dyn PartitionEngine, folder: &Path) -> ScanViewResult<Self> {
        let documents = parse_folder(engine, folder)?;
        Ok(Self {
            documents,
            edits: HashMap::new(),
        })
    }

    /// Re-parses the folder wholesale, discarding all previous documents and
    /// edit state.
    pub fn reload(&mut self, engine: &dyn PartitionEngine, folder: &Path) -> ScanViewResult<()> {
        let documents = parse_folder(engine, folder)?;
        self.documents = documents;
        self.edits.clear();
        Ok(())
    }

    /// True when no documents are loaded.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document names in lexicographic order.
    pub fn document_names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Looks up a document's immutable parse baseline.
    pub fn document(&self, name: &str) -> Option<&ParsedDocument> {
        self.documents.get(name)
    }

    /// Returns the edit tracker for a document, creating it from the parse
    /// baseline on first access.
    ///
    /// Returns `None` for unknown document names.
    pub fn tracker(&mut self, name: &str) -> Option<&mut EditTracker> {
        if !self.edits.contains_key(name) {
            let document = self.documents.get(name)?;
            self.edits
                .insert(name.to_string(), EditTracker::new(&document.elements));
        }
        self.edits.get_mut(name)
    }

    /// Discards a document's edits, restoring fresh copies of its baseline.
    ///
    /// A no-op for unknown documents and for documents that were never
    /// edited.
    pub fn reset_edits(&mut self, name: &str) {
        if let Some(tracker) = self.edits.get_mut(name) {
            tracker.reset();
        }
    }

    /// Re-runs extraction on an adjusted region and applies the result to the
    /// document's working copy.
    ///
    /// On success, `current[index]` gets the newly extracted text and the
    /// adjusted coordinates, and the index is recorded as edited. On failure
    /// the error is returned and edit state is left untouched; there is no
    /// partial mutation.
    pub fn reparse_region(
        &mut self,
        engine: &dyn PartitionEngine,
        name: &str,
        index: usize,
        adjusted: &BoundingBox,
    ) -> ScanViewResult<()> {
        let Some(document) = self.documents.get(name) else {
            return Ok(());
        };
        let filepath = document.filepath.clone();

        // The engine call happens before any mutation so a failure leaves
        // the tracker exactly as it was.
        let new_text = parse_region(engine, &filepath, adjusted)?;

        if let Some(tracker) = self.tracker(name) {
            tracker.apply_region_reparse(index, new_text, adjusted.points.clone());
        }
        Ok(())
    }

    /// Number of elements in a document's working copy (baseline count when
    /// the document was never edited).
    pub fn element_count(&self, name: &str) -> usize {
        match self.edits.get(name) {
            Some(tracker) => tracker.current().len(),
            None => self
                .documents
                .get(name)
                .map(|document| document.elements.len())
                .unwrap_or(0),
        }
    }

    /// Number of edited elements in a document.
    pub fn edited_count(&self, name: &str) -> usize {
        self.edits
            .get(name)
            .map(EditTracker::edited_count)
            .unwrap_or(0)
    }

    /// Per-category element counts for a document's working copy, ordered by
    /// category label.
    pub fn category_counts(&self, name: &str) -> BTreeMap<String, usize> {
        let elements = match self.edits.get(name) {
            Some(tracker) => tracker.current(),
            None => self
                .documents
                .get(name)
                .map(|document| document.elements.as_slice())
                .unwrap_or(&[]),
        };

        let mut counts = BTreeMap::new();
        for element in elements {
            *counts.entry(element.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}
