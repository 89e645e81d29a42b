//! Redaction plan - the engine's hand-off to a document editor

use crate::{MatchKind, RedactionCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Text substituted for every redacted span
pub const DEFAULT_MARKER: &str = "[REDACTED]";

/// A literal substring of the source text and the rule that found it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub kind: MatchKind,
    pub literal: String,
}

impl CandidateMatch {
    pub fn new(kind: MatchKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn category(&self) -> RedactionCategory {
        self.kind.category()
    }
}

/// Per-kind tallies reported back to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummary {
    pub emails: usize,
    pub phones: usize,
    pub full_ssns: usize,
    pub masked_ssns: usize,
    pub partial_ssns: usize,
}

impl RedactionSummary {
    pub fn count(&self, kind: MatchKind) -> usize {
        match kind {
            MatchKind::Email => self.emails,
            MatchKind::Phone => self.phones,
            MatchKind::FullSsn => self.full_ssns,
            MatchKind::MaskedSsn => self.masked_ssns,
            MatchKind::PartialSsn => self.partial_ssns,
        }
    }

    pub fn add(&mut self, kind: MatchKind, n: usize) {
        let slot = match kind {
            MatchKind::Email => &mut self.emails,
            MatchKind::Phone => &mut self.phones,
            MatchKind::FullSsn => &mut self.full_ssns,
            MatchKind::MaskedSsn => &mut self.masked_ssns,
            MatchKind::PartialSsn => &mut self.partial_ssns,
        };
        *slot += n;
    }

    /// Full, masked and partial SSNs summed without cross-checking overlap
    pub fn ssns(&self) -> usize {
        self.full_ssns + self.masked_ssns + self.partial_ssns
    }

    pub fn category(&self, category: RedactionCategory) -> usize {
        match category {
            RedactionCategory::Email => self.emails,
            RedactionCategory::Phone => self.phones,
            RedactionCategory::Ssn => self.ssns(),
        }
    }

    pub fn total(&self) -> usize {
        self.emails + self.phones + self.ssns()
    }
}

/// Ordered, de-duplicated literals to search and replace, plus their counts.
///
/// Built fresh for one invocation and consumed once by the executor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RedactionPlan {
    entries: Vec<CandidateMatch>,
    pub summary: RedactionSummary,
    #[serde(skip)]
    seen: HashSet<(MatchKind, String)>,
}

impl RedactionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a literal; returns false when the same literal was already
    /// planned for this kind.
    pub fn push(&mut self, kind: MatchKind, literal: &str) -> bool {
        if !self.seen.insert((kind, literal.to_string())) {
            return false;
        }
        self.entries.push(CandidateMatch::new(kind, literal));
        true
    }

    pub fn entries(&self) -> &[CandidateMatch] {
        &self.entries
    }

    /// Literals of one kind, in discovery order
    pub fn literals(&self, kind: MatchKind) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.kind == kind)
            .map(|entry| entry.literal.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_deduplicates_per_kind() {
        let mut plan = RedactionPlan::new();
        assert!(plan.push(MatchKind::Email, "a@b.io"));
        assert!(!plan.push(MatchKind::Email, "a@b.io"));
        assert!(plan.push(MatchKind::PartialSsn, "1234"));
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_literals_filters_by_kind() {
        let mut plan = RedactionPlan::new();
        plan.push(MatchKind::Phone, "555-123-4567");
        plan.push(MatchKind::Email, "a@b.io");
        plan.push(MatchKind::Phone, "(555) 987-6543");

        let phones: Vec<_> = plan.literals(MatchKind::Phone).collect();
        assert_eq!(phones, vec!["555-123-4567", "(555) 987-6543"]);
    }

    #[test]
    fn test_summary_totals() {
        let mut summary = RedactionSummary::default();
        summary.add(MatchKind::Email, 2);
        summary.add(MatchKind::Phone, 1);
        summary.add(MatchKind::FullSsn, 1);
        summary.add(MatchKind::MaskedSsn, 1);
        summary.add(MatchKind::PartialSsn, 3);

        assert_eq!(summary.ssns(), 5);
        assert_eq!(summary.category(RedactionCategory::Ssn), 5);
        assert_eq!(summary.total(), 8);
    }
}
