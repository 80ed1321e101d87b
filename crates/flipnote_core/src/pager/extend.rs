//! Append-only extension of a locked page set.
//!
//! # Contract
//! - `locked` reappears unchanged as the prefix of the result.
//! - Entries beyond the locked entry count are the newest prefix of
//!   `current_entries`; each becomes its own page, oldest first.
//! - When `current_entries` is not longer than the locked count, the locked
//!   pages are returned as-is.
//! - The locked suffix is not checked against `current_entries`; edits or
//!   deletions inside history need a fresh `paginate` run.

use crate::model::entry::Entry;
use crate::model::page::{Page, PageSet};
use log::debug;

/// Derives the displayed page set from a locked snapshot plus new entries.
pub fn extend(locked: &PageSet, current_entries: &[Entry]) -> PageSet {
    let locked_count = locked.entry_count();
    let new_count = current_entries.len().saturating_sub(locked_count);

    let mut pages = Vec::with_capacity(locked.len() + new_count);
    pages.extend(locked.iter().cloned());
    pages.extend(
        current_entries[..new_count]
            .iter()
            .rev()
            .cloned()
            .map(Page::single),
    );

    debug!(
        "event=extend module=pager status=ok locked_pages={} locked_entries={} current_entries={} appended_pages={}",
        locked.len(),
        locked_count,
        current_entries.len(),
        new_count
    );
    PageSet::new(pages)
}
