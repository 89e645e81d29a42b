//! In-memory document editor
//!
//! Used for headless redaction of plain text and as the reference
//! implementation of [`DocumentEditor`] in tests.

use async_trait::async_trait;
use redact_core::{HeaderStyle, Result, SearchOptions};
use regex::RegexBuilder;
use tracing::debug;

use crate::editor::DocumentEditor;

/// One tracked replacement. `offset` is where `replacement` starts in the
/// text as it stood right after the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub offset: usize,
    pub original: String,
    pub replacement: String,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    text: String,
    tracking_supported: bool,
    tracking: bool,
    revisions: Vec<Revision>,
    header_style: Option<HeaderStyle>,
}

impl MemoryDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tracking_supported: true,
            tracking: false,
            revisions: Vec::new(),
            header_style: None,
        }
    }

    /// A document whose host has no track-changes mode
    pub fn without_tracking(mut self) -> Self {
        self.tracking_supported = false;
        self
    }

    pub fn with_tracking(mut self, enabled: bool) -> Self {
        self.tracking = enabled;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    pub fn header_style(&self) -> Option<&HeaderStyle> {
        self.header_style.as_ref()
    }

    /// Undo every tracked revision, newest first
    pub fn reject_all(&mut self) {
        for revision in self.revisions.drain(..).rev() {
            let end = revision.offset + revision.replacement.len();
            self.text.replace_range(revision.offset..end, &revision.original);
        }
    }

    /// Keep every tracked revision as plain text
    pub fn accept_all(&mut self) {
        self.revisions.clear();
    }

    /// Byte spans of `literal` honoring case and whole-word rules
    fn find_spans(&self, literal: &str, options: SearchOptions) -> Result<Vec<(usize, usize)>> {
        let re = RegexBuilder::new(&regex::escape(literal))
            .case_insensitive(!options.match_case)
            .build()?;

        let mut spans = Vec::new();
        let mut pos = 0;
        while pos <= self.text.len() {
            let Some(m) = re.find_at(&self.text, pos) else {
                break;
            };
            if !options.whole_word || is_whole_word(&self.text, m.start(), m.end()) {
                spans.push((m.start(), m.end()));
                pos = m.end();
            } else {
                let step = self.text[m.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                pos = m.start() + step;
            }
        }
        Ok(spans)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

#[async_trait]
impl DocumentEditor for MemoryDocument {
    async fn get_text(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }

    async fn search_and_replace(
        &mut self,
        literal: &str,
        options: SearchOptions,
        replacement: &str,
    ) -> Result<usize> {
        if literal.is_empty() {
            return Ok(0);
        }

        let spans = self.find_spans(literal, options)?;
        if spans.is_empty() {
            return Ok(0);
        }

        if !self.tracking && !self.revisions.is_empty() {
            debug!(
                pending = self.revisions.len(),
                "Untracked edit accepts pending revisions"
            );
            self.revisions.clear();
        }

        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;
        for &(start, end) in &spans {
            out.push_str(&self.text[last..start]);
            if self.tracking {
                self.revisions.push(Revision {
                    offset: out.len(),
                    original: self.text[start..end].to_string(),
                    replacement: replacement.to_string(),
                });
            }
            out.push_str(replacement);
            last = end;
        }
        out.push_str(&self.text[last..]);
        self.text = out;

        Ok(spans.len())
    }

    async fn is_tracking_supported(&mut self) -> Result<bool> {
        Ok(self.tracking_supported)
    }

    async fn tracking_mode(&mut self) -> Result<bool> {
        Ok(self.tracking)
    }

    async fn set_tracking_mode(&mut self, enabled: bool) -> Result<()> {
        if enabled && !self.tracking_supported {
            return Err(redact_core::Error::Editor(
                "track changes is not supported by this document".to_string(),
            ));
        }
        self.tracking = enabled;
        Ok(())
    }

    async fn insert_header(&mut self, text: &str, style: &HeaderStyle) -> Result<()> {
        let line = format!("{text}\n");
        if self.tracking {
            self.revisions.push(Revision {
                offset: 0,
                original: String::new(),
                replacement: line.clone(),
            });
        } else {
            for revision in &mut self.revisions {
                revision.offset += line.len();
            }
        }
        self.text.insert_str(0, &line);
        self.header_style = Some(style.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXACT: SearchOptions = SearchOptions {
        match_case: true,
        whole_word: false,
    };

    #[tokio::test]
    async fn test_replaces_every_occurrence() {
        let mut doc = MemoryDocument::new("call 555-1234 or 555-1234");
        let n = doc
            .search_and_replace("555-1234", EXACT, "[X]")
            .await
            .unwrap();

        assert_eq!(n, 2);
        assert_eq!(doc.text(), "call [X] or [X]");
    }

    #[tokio::test]
    async fn test_case_insensitive_search() {
        let mut doc = MemoryDocument::new("Jane@Example.com and jane@example.com");
        let options = SearchOptions {
            match_case: false,
            whole_word: false,
        };
        let n = doc
            .search_and_replace("jane@example.com", options, "[X]")
            .await
            .unwrap();

        assert_eq!(n, 2);
        assert_eq!(doc.text(), "[X] and [X]");
    }

    #[tokio::test]
    async fn test_whole_word_skips_embedded_digits() {
        let mut doc = MemoryDocument::new("ref 912345 and pin 1234.");
        let options = SearchOptions {
            match_case: true,
            whole_word: true,
        };
        let n = doc.search_and_replace("1234", options, "[X]").await.unwrap();

        assert_eq!(n, 1);
        assert_eq!(doc.text(), "ref 912345 and pin [X].");
    }

    #[tokio::test]
    async fn test_regex_metacharacters_are_literal() {
        let mut doc = MemoryDocument::new("(555) 123-4567 vs 555 123-4567");
        let n = doc
            .search_and_replace("(555) 123-4567", EXACT, "[X]")
            .await
            .unwrap();

        assert_eq!(n, 1);
        assert_eq!(doc.text(), "[X] vs 555 123-4567");
    }

    #[tokio::test]
    async fn test_reject_all_restores_original() {
        let original = "a@b.io wrote, then A@B.IO replied";
        let mut doc = MemoryDocument::new(original).with_tracking(true);
        let options = SearchOptions {
            match_case: false,
            whole_word: false,
        };
        doc.search_and_replace("a@b.io", options, "[REDACTED]")
            .await
            .unwrap();
        doc.search_and_replace("replied", EXACT, "[REDACTED]")
            .await
            .unwrap();
        doc.insert_header("HEADER", &HeaderStyle::default())
            .await
            .unwrap();

        assert_eq!(doc.revisions().len(), 4);
        doc.reject_all();
        assert_eq!(doc.text(), original);
    }

    #[tokio::test]
    async fn test_untracked_header_keeps_revisions_aligned() {
        let original = "pin 1234";
        let mut doc = MemoryDocument::new(original).with_tracking(true);
        doc.search_and_replace("1234", EXACT, "[X]").await.unwrap();
        doc.set_tracking_mode(false).await.unwrap();
        doc.insert_header("TOP", &HeaderStyle::default())
            .await
            .unwrap();

        doc.reject_all();
        assert_eq!(doc.text(), "TOP\npin 1234");
    }

    #[tokio::test]
    async fn test_accept_all_keeps_redactions() {
        let mut doc = MemoryDocument::new("pin 1234").with_tracking(true);
        doc.search_and_replace("1234", EXACT, "[X]").await.unwrap();
        doc.insert_header("TOP", &HeaderStyle::default())
            .await
            .unwrap();

        assert!(doc.header_style().is_some_and(|style| style.bold));
        doc.accept_all();
        doc.reject_all();
        assert_eq!(doc.text(), "TOP\npin [X]");
    }

    #[tokio::test]
    async fn test_tracking_unsupported() {
        let mut doc = MemoryDocument::new("text").without_tracking();
        assert!(!doc.is_tracking_supported().await.unwrap());
        assert!(doc.set_tracking_mode(true).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_literal_is_noop() {
        let mut doc = MemoryDocument::new("text");
        assert_eq!(doc.search_and_replace("", EXACT, "[X]").await.unwrap(), 0);
        assert_eq!(doc.text(), "text");
    }
}
