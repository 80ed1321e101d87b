//! Review session state for the flip view.
//!
//! # Responsibility
//! - Own the locked page set for one stable layout.
//! - Derive the displayed page set on every entry refresh.
//! - Track the page cursor for left/right navigation and the slider.
//!
//! # Invariants
//! - The locked page set is replaced wholesale on reflow, never mutated.
//! - The cursor always points at an existing page, or 0 when there are none.
//! - Opening or reflowing positions the cursor on the newest (right-most) page.

use crate::model::entry::Entry;
use crate::model::layout::{LayoutError, LayoutParams};
use crate::model::page::{Page, PageSet};
use crate::pager::{extend, paginate, Measure, TimestampLabel};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session setup failure.
#[derive(Debug)]
pub enum SessionError<E> {
    /// Layout parameters were rejected before pagination.
    Layout(LayoutError),
    /// Caller-supplied measurement failed.
    Measure(E),
}

impl<E: Display> Display for SessionError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
            Self::Measure(err) => write!(f, "measurement failed: {err}"),
        }
    }
}

impl<E: Error + 'static> Error for SessionError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Measure(err) => Some(err),
        }
    }
}

impl<E> From<LayoutError> for SessionError<E> {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

/// Locked pages, displayed pages and the page cursor.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    layout: LayoutParams,
    label: TimestampLabel,
    locked: PageSet,
    displayed: PageSet,
    cursor: usize,
}

impl ReviewSession {
    /// Paginates `entries` (newest-first) and locks the result.
    ///
    /// # Errors
    /// - `Layout` when `layout` fails validation.
    /// - `Measure` when `measure` fails for any entry.
    pub fn open<M>(
        entries: &[Entry],
        measure: &M,
        layout: LayoutParams,
        label: TimestampLabel,
    ) -> Result<Self, SessionError<M::Error>>
    where
        M: Measure + ?Sized,
    {
        layout.validate()?;
        let locked = paginate(entries, measure, &layout, &label).map_err(SessionError::Measure)?;
        let cursor = newest_index(&locked);
        info!(
            "event=session_open module=session status=ok entries={} pages={}",
            entries.len(),
            locked.len()
        );

        Ok(Self {
            layout,
            label,
            displayed: locked.clone(),
            locked,
            cursor,
        })
    }

    /// Re-derives the displayed pages from the locked set and `entries`.
    ///
    /// The cursor keeps its index, so pages already viewed stay put.
    pub fn refresh(&mut self, entries: &[Entry]) {
        self.displayed = extend(&self.locked, entries);
        self.cursor = self.cursor.min(newest_index(&self.displayed));
        debug!(
            "event=session_refresh module=session status=ok pages={} cursor={}",
            self.displayed.len(),
            self.cursor
        );
    }

    /// Re-paginates from scratch when `layout` differs from the active one.
    ///
    /// Returns `Ok(true)` when a new locked set replaced the old one and
    /// `Ok(false)` when the layout is unchanged (nothing is touched).
    ///
    /// # Errors
    /// Same as [`ReviewSession::open`]; the session is left unchanged on error.
    pub fn relayout<M>(
        &mut self,
        entries: &[Entry],
        measure: &M,
        layout: LayoutParams,
    ) -> Result<bool, SessionError<M::Error>>
    where
        M: Measure + ?Sized,
    {
        if !self.layout.requires_reflow(&layout) {
            return Ok(false);
        }
        layout.validate()?;
        let locked =
            paginate(entries, measure, &layout, &self.label).map_err(SessionError::Measure)?;

        info!(
            "event=session_relayout module=session status=ok entries={} old_pages={} new_pages={}",
            entries.len(),
            self.displayed.len(),
            locked.len()
        );
        self.layout = layout;
        self.cursor = newest_index(&locked);
        self.displayed = locked.clone();
        self.locked = locked;
        Ok(true)
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    pub fn label(&self) -> &TimestampLabel {
        &self.label
    }

    /// Snapshot from the last full pagination.
    pub fn locked_pages(&self) -> &PageSet {
        &self.locked
    }

    /// Locked pages plus appended single-entry pages.
    pub fn displayed_pages(&self) -> &PageSet {
        &self.displayed
    }

    pub fn page_count(&self) -> usize {
        self.displayed.len()
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.displayed.get(self.cursor)
    }

    /// Entries on the current page; empty when there are no pages.
    pub fn current_entries(&self) -> &[Entry] {
        self.current_page().map(Page::entries).unwrap_or(&[])
    }

    /// Moves one page left (towards older notes). Returns whether it moved.
    pub fn go_older(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves one page right (towards newer notes). Returns whether it moved.
    pub fn go_newer(&mut self) -> bool {
        if self.cursor >= newest_index(&self.displayed) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Jumps to `index`, clamped to the existing pages.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.cursor = index.min(newest_index(&self.displayed));
        self.cursor
    }

    /// One-based `"n / total"`; `"0 / 0"` without pages.
    pub fn position_label(&self) -> String {
        if self.displayed.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.cursor + 1, self.displayed.len())
    }
}

fn newest_index(pages: &PageSet) -> usize {
    pages.len().saturating_sub(1)
}
