//! Edit tracking for extracted elements.
//!
//! Each open document gets an [`EditTracker`]: a deep-copied original
//! snapshot, a mutable working copy, and the set of touched indices. The
//! original is never mutated after creation; relabeling and region re-parses
//! only ever touch the working copy, and a reset restores fresh copies of the
//! baseline. Elements are never inserted or deleted, so both snapshots always
//! have the same length.

use crate::parser::Element;
use crate::processors::Point;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Sentinel returned by [`EditTracker::summary`] when nothing was edited.
const NO_EDITS: &str = "No edits made";

/// Per-document original/current/edited-indices triple enabling diffing and
/// reset.
#[derive(Debug, Clone)]
pub struct EditTracker {
    original: Vec<Element>,
    current: Vec<Element>,
    edited: BTreeSet<usize>,
}

impl EditTracker {
    /// Creates a tracker with deep copies of `elements` as both the original
    /// snapshot and the working copy.
    pub fn new(elements: &[Element]) -> Self {
        Self {
            original: elements.to_vec(),
            current: elements.to_vec(),
            edited: BTreeSet::new(),
        }
    }

    /// The immutable original snapshot.
    pub fn original(&self) -> &[Element] {
        &self.original
    }

    /// The working copy, reflecting all edits so far.
    pub fn current(&self) -> &[Element] {
        &self.current
    }

    /// Indices of elements touched since creation or the last reset, in
    /// ascending order.
    pub fn edited_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.edited.iter().copied()
    }

    /// Number of elements touched since creation or the last reset.
    pub fn edited_count(&self) -> usize {
        self.edited.len()
    }

    /// Changes the category of `current[index]`.
    ///
    /// Out-of-range indices are silently ignored; callers pre-validate using
    /// the element count. In-range edits record the index.
    pub fn relabel(&mut self, index: usize, new_category: impl Into<String>) {
        if let Some(element) = self.current.get_mut(index) {
            element.category = new_category.into();
            self.edited.insert(index);
        }
    }

    /// Replaces the text of `current[index]`.
    ///
    /// Same bounds contract as [`relabel`](Self::relabel).
    pub fn replace_text(&mut self, index: usize, new_text: impl Into<String>) {
        if let Some(element) = self.current.get_mut(index) {
            element.text = new_text.into();
            self.edited.insert(index);
        }
    }

    /// Applies the outcome of a region re-parse: new text plus the adjusted
    /// coordinates, in one step.
    ///
    /// Same bounds contract as [`relabel`](Self::relabel).
    pub fn apply_region_reparse(
        &mut self,
        index: usize,
        new_text: impl Into<String>,
        new_coordinates: Vec<Point>,
    ) {
        if let Some(element) = self.current.get_mut(index) {
            element.text = new_text.into();
            element.coordinates = Some(new_coordinates);
            self.edited.insert(index);
        }
    }

    /// Produces a human-readable summary of all edits.
    ///
    /// One line per edited element in ascending index order, noting a
    /// category change (`old → new`) and/or that the text was modified.
    /// Elements marked edited without a visible diff (same-category relabel,
    /// coordinates-only change) are omitted. Returns `"No edits made"` when
    /// nothing was recorded.
    pub fn summary(&self) -> String {
        if self.edited.is_empty() {
            return NO_EDITS.to_string();
        }

        let mut lines = Vec::new();
        for &idx in &self.edited {
            let original = &self.original[idx];
            let current = &self.current[idx];

            let mut changes = Vec::new();
            if original.category != current.category {
                changes.push(format!(
                    "Type: {} → {}",
                    original.category, current.category
                ));
            }
            if original.text != current.text {
                changes.push("Text modified".to_string());
            }

            if !changes.is_empty() {
                let mut line = String::new();
                let _ = write!(line, "Element {}: {}", idx + 1, changes.join(", "));
                lines.push(line);
            }
        }

        if lines.is_empty() {
            NO_EDITS.to_string()
        } else {
            lines.join("\n")
        }
    }

    /// Discards all edits, restoring fresh deep copies of the original
    /// snapshot.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        self.edited.clear();
    }
}
