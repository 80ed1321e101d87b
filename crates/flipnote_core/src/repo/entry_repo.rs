//! Entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist captured entries.
//! - Return one owner's entries newest-first, ready for pagination.
//!
//! # Invariants
//! - Write paths call `Entry::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Lists are ordered `ts DESC, id DESC`.

use crate::db::DbError;
use crate::model::entry::{Entry, EntryValidationError};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Latest entries fetched for review when no limit is given.
pub const ENTRY_DEFAULT_LIMIT: u32 = 200;
/// Hard cap for one list call.
pub const ENTRY_LIMIT_MAX: u32 = 1000;

/// Row id assigned by storage.
pub type EntryRowId = i64;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing one owner's entries.
#[derive(Debug, Clone, Default)]
pub struct EntryListQuery {
    pub owner: String,
    /// `None` or `0` means [`ENTRY_DEFAULT_LIMIT`]; capped at [`ENTRY_LIMIT_MAX`].
    pub limit: Option<u32>,
}

impl EntryListQuery {
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            limit: None,
        }
    }
}

/// Resolves the effective list limit.
pub fn normalize_entry_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => ENTRY_DEFAULT_LIMIT,
        Some(value) => value.min(ENTRY_LIMIT_MAX),
    }
}

/// Storage contract for entries.
pub trait EntryRepository {
    fn create_entry(&self, entry: &Entry) -> RepoResult<EntryRowId>;
    fn list_entries(&self, query: &EntryListQuery) -> RepoResult<Vec<Entry>>;
    fn count_entries(&self, owner: &str) -> RepoResult<u64>;
}

impl<R: EntryRepository + ?Sized> EntryRepository for &R {
    fn create_entry(&self, entry: &Entry) -> RepoResult<EntryRowId> {
        (**self).create_entry(entry)
    }

    fn list_entries(&self, query: &EntryListQuery) -> RepoResult<Vec<Entry>> {
        (**self).list_entries(query)
    }

    fn count_entries(&self, owner: &str) -> RepoResult<u64> {
        (**self).count_entries(owner)
    }
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create_entry(&self, entry: &Entry) -> RepoResult<EntryRowId> {
        entry.validate()?;

        self.conn.execute(
            "INSERT INTO entries (owner, text, ts) VALUES (?1, ?2, ?3);",
            params![entry.owner.as_str(), entry.text.as_str(), entry.timestamp],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_entries(&self, query: &EntryListQuery) -> RepoResult<Vec<Entry>> {
        let limit = normalize_entry_limit(query.limit);
        let mut stmt = self.conn.prepare(
            "SELECT owner, text, ts
             FROM entries
             WHERE owner = ?1
             ORDER BY ts DESC, id DESC
             LIMIT ?2;",
        )?;

        let mut rows = stmt.query(params![query.owner.as_str(), i64::from(limit)])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        debug!(
            "event=entry_list module=repo status=ok applied_limit={} count={}",
            limit,
            entries.len()
        );
        Ok(entries)
    }

    fn count_entries(&self, owner: &str) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM entries WHERE owner = ?1;",
            [owner],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative entry count `{count}`")))
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let entry = Entry {
        owner: row.get("owner")?,
        text: row.get("text")?,
        timestamp: row.get("ts")?,
    };
    entry
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("{err} (ts={})", entry.timestamp)))?;
    Ok(entry)
}
