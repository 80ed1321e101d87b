//! Pagination engine for the flip view.
//!
//! # Responsibility
//! - Split newest-first entries into height-bounded pages (`paginate`).
//! - Append newly captured entries without reflowing locked pages (`extend`).
//! - Provide the measurement seam and the label text that gets measured.
//!
//! # Invariants
//! - Both operations are pure: no I/O, no shared state, no retries.
//! - Returned page sets are ordered oldest-page-first.
//! - Locked pages are borrowed read-only and reappear unchanged.

pub mod extend;
pub mod label;
pub mod measure;
pub mod paginate;

pub use extend::extend;
pub use label::TimestampLabel;
pub use measure::{CachedMeasure, Measure, MonospaceMeasure};
pub use paginate::paginate;
