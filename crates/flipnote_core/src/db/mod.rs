//! Local SQLite file holding captured entries.
//!
//! The store has a single `entries` table keyed by row id and indexed by
//! `(owner, ts DESC)` so the newest-first review query never sorts.
//! Schema changes are numbered scripts under `migrations/`; a database
//! stamped with a higher `user_version` than this build knows is refused
//! rather than read.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Entry store open or query failure.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// File was migrated by a newer Flipnote build.
    NewerSchema { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "entry store: {err}"),
            Self::NewerSchema { found, supported } => write!(
                f,
                "entry store was written by a newer build (schema {found}, this build reads up to {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::NewerSchema { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
