//! Core domain models for redact
//!
//! This crate contains:
//! - Redaction categories and match kinds
//! - The redaction plan handed to a document editor
//! - The result contract returned to callers
//! - Shared error types

pub mod category;
pub mod error;
pub mod header;
pub mod plan;
pub mod result;

pub use category::{MatchKind, RedactionCategory, SearchOptions};
pub use error::{Error, Result};
pub use header::{Alignment, DEFAULT_HEADER_TEXT, HeaderStyle};
pub use plan::{CandidateMatch, DEFAULT_MARKER, RedactionPlan, RedactionSummary};
pub use result::RedactionResult;
