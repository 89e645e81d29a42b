//! Redaction categories and the finer-grained match kinds behind them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counter bucket a match is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionCategory {
    Email,
    Phone,
    Ssn,
}

impl fmt::Display for RedactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
        };
        f.write_str(name)
    }
}

/// Which rule produced a candidate.
///
/// Variants are declared in replacement order: every literal of one kind is
/// replaced before the next kind is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Email,
    Phone,
    FullSsn,
    MaskedSsn,
    PartialSsn,
}

impl MatchKind {
    pub const ORDERED: [MatchKind; 5] = [
        MatchKind::Email,
        MatchKind::Phone,
        MatchKind::FullSsn,
        MatchKind::MaskedSsn,
        MatchKind::PartialSsn,
    ];

    pub fn category(self) -> RedactionCategory {
        match self {
            Self::Email => RedactionCategory::Email,
            Self::Phone => RedactionCategory::Phone,
            Self::FullSsn | Self::MaskedSsn | Self::PartialSsn => RedactionCategory::Ssn,
        }
    }

    /// Search flags the document editor uses when replacing literals of this kind
    pub fn search_options(self) -> SearchOptions {
        match self {
            Self::Email | Self::MaskedSsn => SearchOptions {
                match_case: false,
                whole_word: false,
            },
            Self::Phone | Self::FullSsn => SearchOptions {
                match_case: true,
                whole_word: false,
            },
            // A bare 4-digit group must not be cut out of a longer number
            Self::PartialSsn => SearchOptions {
                match_case: true,
                whole_word: true,
            },
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::FullSsn => "full_ssn",
            Self::MaskedSsn => "masked_ssn",
            Self::PartialSsn => "partial_ssn",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub match_case: bool,
    pub whole_word: bool,
}
