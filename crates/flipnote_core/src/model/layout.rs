//! Layout parameters that size review pages.
//!
//! # Responsibility
//! - Carry the viewport and font metrics used for measurement.
//! - Decide when a change requires a full reflow.
//!
//! # Invariants
//! - `content_width`, `page_height`, `font_size`, `line_height` are finite and > 0.
//! - `item_gap` and `top_padding` are finite and >= 0.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Widest readable column in the review screen.
pub const MAX_CONTENT_WIDTH: f64 = 680.0;
/// Left plus right gutter around the text column.
pub const HORIZONTAL_GUTTER: f64 = 64.0;

/// Page sizing inputs, all in the same unit as measured heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub content_width: f64,
    pub page_height: f64,
    pub font_size: f64,
    pub line_height: f64,
    /// Spacing charged once per entry on top of its measured height.
    pub item_gap: f64,
    /// Header offset charged once at the start of every page.
    pub top_padding: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            content_width: MAX_CONTENT_WIDTH,
            page_height: 800.0,
            font_size: 18.0,
            line_height: 34.0,
            item_gap: 32.0,
            top_padding: 36.0,
        }
    }
}

/// Rejected layout parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Field must be finite and strictly positive.
    NotPositive { field: &'static str, value: f64 },
    /// Field must be finite and zero or positive.
    Negative { field: &'static str, value: f64 },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "layout `{field}` must be a positive number, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "layout `{field}` must not be negative, got {value}")
            }
        }
    }
}

impl Error for LayoutError {}

impl LayoutParams {
    /// Derives layout for a viewport, keeping default font metrics.
    ///
    /// The text column is the viewport minus gutters, capped at
    /// [`MAX_CONTENT_WIDTH`]; the page is the full viewport height.
    pub fn for_viewport(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            content_width: (viewport_width - HORIZONTAL_GUTTER).min(MAX_CONTENT_WIDTH),
            page_height: viewport_height,
            ..Self::default()
        }
    }

    /// Checks every field against the module invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("content_width", self.content_width),
            ("page_height", self.page_height),
            ("font_size", self.font_size),
            ("line_height", self.line_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::NotPositive { field, value });
            }
        }

        let non_negative = [("item_gap", self.item_gap), ("top_padding", self.top_padding)];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Whether switching to `next` invalidates a locked page set.
    pub fn requires_reflow(&self, next: &LayoutParams) -> bool {
        self != next
    }
}
