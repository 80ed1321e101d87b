//! Repository layer for saved entries.
//!
//! # Responsibility
//! - Define storage contracts used by capture and review flows.
//! - Keep SQL inside the core persistence boundary.

pub mod entry_repo;
