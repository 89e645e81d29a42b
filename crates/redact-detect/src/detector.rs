//! Turns raw pattern matches into a redaction plan

use redact_core::{MatchKind, RedactionCategory, RedactionPlan};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use crate::patterns::{self, EMAIL, FULL_SSN, MASKED_SSN, PHONE};
use crate::validate;

/// Which part of a match is the candidate literal
#[derive(Debug, Clone, Copy)]
enum Capture {
    Whole,
    Group(usize),
}

/// How a kind contributes to its counter
#[derive(Debug, Clone, Copy)]
enum Tally {
    /// Every accepted occurrence counts
    Occurrences,
    /// Each distinct literal counts once
    Distinct,
}

/// One row of the detection table: patterns, extraction and acceptance for a kind
struct Rule {
    kind: MatchKind,
    patterns: Vec<&'static Regex>,
    capture: Capture,
    tally: Tally,
    /// Returns the literal to plan, or `None` to drop the match
    refine: fn(&str) -> Option<&str>,
}

impl Rule {
    fn accepted<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut out = Vec::new();
        for pattern in &self.patterns {
            match self.capture {
                Capture::Whole => {
                    out.extend(pattern.find_iter(text).map(|m| m.as_str()));
                }
                Capture::Group(index) => {
                    out.extend(
                        pattern
                            .captures_iter(text)
                            .filter_map(|caps| caps.get(index))
                            .map(|m| m.as_str()),
                    );
                }
            }
        }
        out.into_iter().filter_map(self.refine).collect()
    }
}

fn keep(candidate: &str) -> Option<&str> {
    Some(candidate)
}

fn refine_phone(candidate: &str) -> Option<&str> {
    let trimmed = validate::trim_phone(candidate);
    validate::is_valid_phone(trimmed).then_some(trimmed)
}

fn refine_full_ssn(candidate: &str) -> Option<&str> {
    validate::is_valid_ssn(candidate).then_some(candidate)
}

/// Rules in replacement order
fn rules() -> Vec<Rule> {
    vec![
        Rule {
            kind: MatchKind::Email,
            patterns: vec![&*EMAIL],
            capture: Capture::Whole,
            tally: Tally::Occurrences,
            refine: keep,
        },
        Rule {
            kind: MatchKind::Phone,
            patterns: vec![&*PHONE],
            capture: Capture::Whole,
            tally: Tally::Occurrences,
            refine: refine_phone,
        },
        Rule {
            kind: MatchKind::FullSsn,
            patterns: vec![&*FULL_SSN],
            capture: Capture::Whole,
            tally: Tally::Occurrences,
            refine: refine_full_ssn,
        },
        Rule {
            kind: MatchKind::MaskedSsn,
            patterns: vec![&*MASKED_SSN],
            capture: Capture::Whole,
            tally: Tally::Occurrences,
            refine: keep,
        },
        Rule {
            kind: MatchKind::PartialSsn,
            patterns: patterns::partial_ssn_patterns().to_vec(),
            capture: Capture::Group(1),
            tally: Tally::Distinct,
            refine: keep,
        },
    ]
}

/// Detection engine for emails, phone numbers and SSNs
pub struct Detector {
    rules: Vec<Rule>,
    enabled: HashSet<RedactionCategory>,
}

impl Detector {
    /// Detector with every category enabled
    pub fn new() -> Self {
        Self::with_categories([
            RedactionCategory::Email,
            RedactionCategory::Phone,
            RedactionCategory::Ssn,
        ])
    }

    pub fn with_categories(categories: impl IntoIterator<Item = RedactionCategory>) -> Self {
        Self {
            rules: rules(),
            enabled: categories.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, category: RedactionCategory) -> bool {
        self.enabled.contains(&category)
    }

    /// Accepted candidates of one kind, in match order, duplicates included
    pub fn candidates<'t>(&self, text: &'t str, kind: MatchKind) -> Vec<&'t str> {
        if !self.is_enabled(kind.category()) {
            return Vec::new();
        }
        self.rules
            .iter()
            .filter(|rule| rule.kind == kind)
            .flat_map(|rule| rule.accepted(text))
            .collect()
    }

    /// Distinct 4-digit groups found by every contextual partial-SSN form
    pub fn partial_ssns(&self, text: &str) -> BTreeSet<String> {
        self.candidates(text, MatchKind::PartialSsn)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Build the plan for one text snapshot
    pub fn plan(&self, text: &str) -> RedactionPlan {
        let mut plan = RedactionPlan::new();

        for rule in &self.rules {
            if !self.is_enabled(rule.kind.category()) {
                continue;
            }

            let accepted = rule.accepted(text);
            let mut distinct = 0;
            for literal in &accepted {
                if plan.push(rule.kind, literal) {
                    distinct += 1;
                }
            }

            let count = match rule.tally {
                Tally::Occurrences => accepted.len(),
                Tally::Distinct => distinct,
            };
            plan.summary.add(rule.kind, count);

            debug!(kind = %rule.kind, count, distinct, "Scanned");
        }

        plan
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}
