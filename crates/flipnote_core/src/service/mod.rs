//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into capture/review use-cases.
//! - Keep UI layers decoupled from storage details.

pub mod entry_service;
