//! Page and page-set shapes.
//!
//! # Responsibility
//! - Hold one screen's worth of entries.
//! - Hold the ordered pages shown in the flip view.
//!
//! # Invariants
//! - Entries inside a page keep consumption order (newest first).
//! - Pages inside a set are ordered oldest first.
//! - A page set produced by pagination never contains an empty page.

use crate::model::entry::Entry;
use serde::{Deserialize, Serialize};

/// One screen's worth of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    entries: Vec<Entry>,
}

impl Page {
    /// Wraps entries that are already in consumption order (newest first).
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Page holding exactly one entry.
    pub fn single(entry: Entry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest entry on the page (first placed).
    pub fn newest(&self) -> Option<&Entry> {
        self.entries.first()
    }

    /// Oldest entry on the page (last placed).
    pub fn oldest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Entries top to bottom as rendered: oldest at the top, newest at the bottom.
    pub fn display_order(&self) -> impl DoubleEndedIterator<Item = &Entry> + ExactSizeIterator {
        self.entries.iter().rev()
    }
}

/// Ordered pages, oldest page first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSet {
    pages: Vec<Page>,
}

impl PageSet {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Zero pages. Returned for an empty entry list.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Total entries across all pages.
    pub fn entry_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }
}

impl FromIterator<Page> for PageSet {
    fn from_iter<T: IntoIterator<Item = Page>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
