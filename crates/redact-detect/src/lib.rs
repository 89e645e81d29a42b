//! PII detection for document text
//!
//! Finds email addresses, phone numbers, and full, masked and contextual
//! partial Social Security Numbers, and aggregates them into a
//! [`RedactionPlan`](redact_core::RedactionPlan).

pub mod detector;
pub mod patterns;
pub mod validate;

pub use detector::Detector;
pub use validate::{is_valid_phone, is_valid_ssn};
