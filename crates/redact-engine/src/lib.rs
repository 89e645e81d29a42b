//! Redaction plan execution
//!
//! Scans a document through the [`DocumentEditor`] capability, applies the
//! plan category by category and reports a [`RedactionResult`](redact_core::RedactionResult).

pub mod editor;
pub mod executor;
pub mod memory;

pub use editor::DocumentEditor;
pub use executor::{Engine, EngineOptions, Header};
pub use memory::{MemoryDocument, Revision};
