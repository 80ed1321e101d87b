//! Entry domain model.
//!
//! # Responsibility
//! - Define the immutable record for one saved note.
//! - Validate capture input before it reaches storage.
//!
//! # Invariants
//! - `timestamp` is Unix epoch milliseconds and orders entries.
//! - Persisted entries never carry blank `owner` or blank `text`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Unix epoch milliseconds.
pub type EpochMillis = i64;

/// One saved note.
///
/// Wire names follow the stored JSON shape (`uid`, `text`, `ts`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque author id. Only used upstream for filtering.
    #[serde(rename = "uid")]
    pub owner: String,
    /// Raw note content; may contain line breaks.
    pub text: String,
    /// Creation instant in epoch milliseconds.
    #[serde(rename = "ts")]
    pub timestamp: EpochMillis,
}

/// Validation failures for capture/storage paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    BlankOwner,
    BlankText,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankOwner => write!(f, "entry owner must not be blank"),
            Self::BlankText => write!(f, "entry text must not be blank"),
        }
    }
}

impl Error for EntryValidationError {}

impl Entry {
    /// Creates an entry without validation.
    ///
    /// Pagination accepts any entry; storage paths call [`Entry::validate`].
    pub fn new(owner: impl Into<String>, text: impl Into<String>, timestamp: EpochMillis) -> Self {
        Self {
            owner: owner.into(),
            text: text.into(),
            timestamp,
        }
    }

    /// Checks the storage invariants.
    ///
    /// # Errors
    /// - `BlankOwner` when `owner` is empty or whitespace only.
    /// - `BlankText` when `text` is empty or whitespace only.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.owner.trim().is_empty() {
            return Err(EntryValidationError::BlankOwner);
        }
        if self.text.trim().is_empty() {
            return Err(EntryValidationError::BlankText);
        }
        Ok(())
    }
}
