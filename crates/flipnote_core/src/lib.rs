//! Core domain logic for Flipnote.
//!
//! Notes are captured as timestamped entries and reviewed in a paginated,
//! left-to-right flip view. The [`pager`] module holds the pagination engine;
//! the remaining modules are the thin storage, capture and session layers
//! around it.

pub mod db;
pub mod logging;
pub mod model;
pub mod pager;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::entry::{Entry, EntryValidationError, EpochMillis};
pub use model::layout::{LayoutError, LayoutParams};
pub use model::page::{Page, PageSet};
pub use pager::{extend, paginate, CachedMeasure, Measure, MonospaceMeasure, TimestampLabel};
pub use repo::entry_repo::{
    EntryListQuery, EntryRepository, RepoError, RepoResult, SqliteEntryRepository,
};
pub use service::entry_service::{EntryService, EntryServiceError};
pub use session::{ReviewSession, SessionError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
