//! Entry capture use-case service.
//!
//! # Responsibility
//! - Turn raw text-box input into stored entries.
//! - Load the newest-first entry list consumed by pagination.
//!
//! # Invariants
//! - Stored text is trimmed; blank input is rejected, never stored.
//! - The service stays storage-agnostic.

use crate::model::entry::{Entry, EntryValidationError, EpochMillis};
use crate::repo::entry_repo::{EntryListQuery, EntryRepository, RepoError, RepoResult};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum EntryServiceError {
    /// Input rejected before persistence.
    Validation(EntryValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EntryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EntryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for EntryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Capture/review facade over an [`EntryRepository`].
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores `text` (trimmed) for `owner` at `timestamp`.
    ///
    /// # Errors
    /// - `Validation` when owner or trimmed text is blank.
    /// - `Repo` on storage failure.
    pub fn capture(
        &self,
        owner: &str,
        text: &str,
        timestamp: EpochMillis,
    ) -> Result<Entry, EntryServiceError> {
        let entry = Entry::new(owner, text.trim(), timestamp);
        match self.repo.create_entry(&entry) {
            Ok(row_id) => {
                info!(
                    "event=entry_create module=service status=ok row_id={} text_chars={}",
                    row_id,
                    entry.text.chars().count()
                );
                Ok(entry)
            }
            Err(err) => {
                warn!("event=entry_create module=service status=error error={err}");
                Err(err.into())
            }
        }
    }

    /// Same as [`EntryService::capture`], stamped with the current time.
    pub fn capture_now(&self, owner: &str, text: &str) -> Result<Entry, EntryServiceError> {
        self.capture(owner, text, Utc::now().timestamp_millis())
    }

    /// Newest-first entries for `owner`, at most `limit` (default 200).
    pub fn recent(&self, owner: &str, limit: Option<u32>) -> RepoResult<Vec<Entry>> {
        self.repo.list_entries(&EntryListQuery {
            owner: owner.to_string(),
            limit,
        })
    }

    pub fn count(&self, owner: &str) -> RepoResult<u64> {
        self.repo.count_entries(owner)
    }
}
