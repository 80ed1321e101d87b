//! Domain model for saved notes and their paginated projection.
//!
//! # Responsibility
//! - Define the entry record shared by storage, capture and pagination.
//! - Define page and page-set shapes consumed by the review screen.
//! - Define layout parameters that drive page sizing.
//!
//! # Invariants
//! - Entry lists handed to pagination are ordered newest-first.
//! - Page sets are ordered oldest-page-first (left to right).

pub mod entry;
pub mod layout;
pub mod page;
