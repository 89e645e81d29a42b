use std::sync::Arc;

use redact_core::{
    DEFAULT_HEADER_TEXT, DEFAULT_MARKER, HeaderStyle, MatchKind, RedactionPlan, RedactionResult,
    RedactionSummary, Result,
};
use redact_detect::Detector;
use tracing::{debug, info, warn};

use crate::editor::DocumentEditor;
use crate::memory::MemoryDocument;

/// Banner inserted above a redacted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub text: String,
    pub style: HeaderStyle,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            text: DEFAULT_HEADER_TEXT.to_string(),
            style: HeaderStyle::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Text substituted for every redacted span
    pub marker: String,
    /// Record redactions as revisions when the document supports it
    pub track_changes: bool,
    pub header: Option<Header>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            track_changes: false,
            header: Some(Header::default()),
        }
    }
}

/// State accumulated while a pass runs; survives a mid-pass failure
#[derive(Debug, Default)]
struct Pass {
    tally: RedactionSummary,
    tracking_enabled: bool,
    header_added: bool,
    /// Tracking mode to put back once the pass ends
    restore_tracking: Option<bool>,
}

pub struct Engine {
    detector: Arc<Detector>,
    options: EngineOptions,
}

impl Engine {
    pub fn new(detector: Detector, options: EngineOptions) -> Self {
        Self {
            detector: Arc::new(detector),
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn plan(&self, text: &str) -> RedactionPlan {
        self.detector.plan(text)
    }

    /// Run one redaction pass against `editor`.
    ///
    /// Never fails: faults are reported through `success`/`error` on the
    /// result. Replacements already applied when a fault occurs stay applied.
    pub async fn run<E>(&self, editor: &mut E) -> RedactionResult
    where
        E: DocumentEditor + ?Sized,
    {
        let mut pass = Pass::default();
        let outcome = self.execute(editor, &mut pass).await;

        if let Some(prior) = pass.restore_tracking
            && let Err(e) = editor.set_tracking_mode(prior).await
        {
            warn!(error = %e, "Failed to restore tracking mode");
        }

        let result = match outcome {
            Ok(()) => RedactionResult::completed(&pass.tally),
            Err(e) => {
                warn!(error = %e, "Redaction pass failed");
                RedactionResult::failed(&pass.tally, e.to_string())
            }
        };
        result
            .with_tracking(pass.tracking_enabled)
            .with_header(pass.header_added)
    }

    /// Redact a plain string; returns the redacted text and the result
    pub async fn redact_text(&self, text: &str) -> (String, RedactionResult) {
        let mut document = MemoryDocument::new(text);
        let result = self.run(&mut document).await;
        (document.into_text(), result)
    }

    async fn execute<E>(&self, editor: &mut E, pass: &mut Pass) -> Result<()>
    where
        E: DocumentEditor + ?Sized,
    {
        let text = editor.get_text().await?;
        let plan = self.detector.plan(&text);
        info!(
            emails = plan.summary.emails,
            phones = plan.summary.phones,
            ssns = plan.summary.ssns(),
            literals = plan.len(),
            "Built redaction plan"
        );

        self.configure_tracking(editor, pass).await?;

        // Earlier kinds win overlaps: later literals are searched in the
        // already-redacted text.
        for kind in MatchKind::ORDERED {
            let mut replaced = 0;
            for literal in plan.literals(kind) {
                replaced += editor
                    .search_and_replace(literal, kind.search_options(), &self.options.marker)
                    .await?;
            }
            pass.tally.add(kind, plan.summary.count(kind));
            debug!(kind = %kind, replaced, "Applied redactions");
        }

        if let Some(header) = &self.options.header
            && !plan.is_empty()
        {
            editor.insert_header(&header.text, &header.style).await?;
            pass.header_added = true;
            debug!("Inserted redaction header");
        }

        Ok(())
    }

    async fn configure_tracking<E>(&self, editor: &mut E, pass: &mut Pass) -> Result<()>
    where
        E: DocumentEditor + ?Sized,
    {
        let wanted = self.options.track_changes;

        if !editor.is_tracking_supported().await? {
            if wanted {
                warn!("Track changes requested but not supported; redacting without it");
            }
            return Ok(());
        }

        let prior = editor.tracking_mode().await?;
        if prior != wanted {
            editor.set_tracking_mode(wanted).await?;
            pass.restore_tracking = Some(prior);
            info!(enabled = wanted, "Switched tracking mode for redaction pass");
        }
        pass.tracking_enabled = wanted;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Detector::new(), EngineOptions::default())
    }
}
