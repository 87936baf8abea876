/*!
 * Comparison result model.
 */

use serde::{Deserialize, Serialize};

use crate::extraction::Region;
use crate::structure::BraceImbalance;

/// Kind of a discrepancy entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    ContentChange,
    MissingInTranslation,
    ExtraInTranslation,
}

impl std::fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DiscrepancyKind::ContentChange => "content-change",
            DiscrepancyKind::MissingInTranslation => "missing-in-translation",
            DiscrepancyKind::ExtraInTranslation => "extra-in-translation",
        };
        write!(f, "{}", label)
    }
}

/// One reported difference between the documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// Aligned regions whose canonical forms differ
    ContentChange { original: Region, translated: Region },
    /// Region of the original with no counterpart in the translation
    MissingInTranslation { original: Region },
    /// Region of the translation with no counterpart in the original
    ExtraInTranslation { translated: Region },
}

impl Discrepancy {
    pub fn kind(&self) -> DiscrepancyKind {
        match self {
            Discrepancy::ContentChange { .. } => DiscrepancyKind::ContentChange,
            Discrepancy::MissingInTranslation { .. } => DiscrepancyKind::MissingInTranslation,
            Discrepancy::ExtraInTranslation { .. } => DiscrepancyKind::ExtraInTranslation,
        }
    }
}

/// Verdict and discrepancies of one comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// True when no discrepancy was found
    pub passed: bool,
    /// Regions found in the original; a count difference is visible here
    /// rather than as a separate entry
    pub original_count: usize,
    /// Regions found in the translation
    pub translated_count: usize,
    /// Discrepancies in report order
    pub discrepancies: Vec<Discrepancy>,
    /// Brace imbalance of the translated document, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imbalance: Option<BraceImbalance>,
}

impl ComparisonResult {
    /// Number of entries of the given kind
    pub fn count_of(&self, kind: DiscrepancyKind) -> usize {
        self.discrepancies.iter().filter(|d| d.kind() == kind).count()
    }

    /// Final verdict, optionally treating a brace imbalance as a failure
    pub fn verdict(&self, fail_on_imbalance: bool) -> bool {
        self.passed && !(fail_on_imbalance && self.imbalance.is_some())
    }
}
