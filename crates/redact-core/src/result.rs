use crate::RedactionSummary;
use serde::{Deserialize, Serialize};

/// Outcome of one redaction pass, returned to the caller in every case
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionResult {
    pub success: bool,
    pub emails_redacted: usize,
    pub phones_redacted: usize,
    pub ssns_redacted: usize,
    pub total_redacted: usize,
    pub tracking_enabled: bool,
    pub header_added: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RedactionResult {
    pub fn completed(summary: &RedactionSummary) -> Self {
        Self::from_summary(summary, true)
    }

    /// A failed pass still reports whatever was tallied before the fault
    pub fn failed(summary: &RedactionSummary, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::from_summary(summary, false)
        }
    }

    pub fn with_tracking(mut self, enabled: bool) -> Self {
        self.tracking_enabled = enabled;
        self
    }

    pub fn with_header(mut self, added: bool) -> Self {
        self.header_added = added;
        self
    }

    fn from_summary(summary: &RedactionSummary, success: bool) -> Self {
        Self {
            success,
            emails_redacted: summary.emails,
            phones_redacted: summary.phones,
            ssns_redacted: summary.ssns(),
            total_redacted: summary.total(),
            tracking_enabled: false,
            header_added: false,
            error: None,
        }
    }
}
