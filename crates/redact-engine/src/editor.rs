//! Document editor capability

use async_trait::async_trait;
use redact_core::{HeaderStyle, Result, SearchOptions};

/// The live document a redaction pass runs against.
///
/// Methods take `&mut self`: a pass holds the editor exclusively, so two
/// passes can never be in flight on the same document session. Every call is
/// awaited to completion (including the host's commit) before the next one
/// is issued.
#[async_trait]
pub trait DocumentEditor: Send {
    /// Full text content at the time of the call
    async fn get_text(&mut self) -> Result<String>;

    /// Replace every occurrence of `literal`; returns how many were replaced
    async fn search_and_replace(
        &mut self,
        literal: &str,
        options: SearchOptions,
        replacement: &str,
    ) -> Result<usize>;

    /// Whether the host offers a track-changes mode at all
    async fn is_tracking_supported(&mut self) -> Result<bool>;

    async fn tracking_mode(&mut self) -> Result<bool>;

    async fn set_tracking_mode(&mut self, enabled: bool) -> Result<()>;

    async fn insert_header(&mut self, text: &str, style: &HeaderStyle) -> Result<()>;
}
