/*!
 * Region data model.
 */

use serde::{Deserialize, Serialize};

/// Which of the two compared documents a region came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Original,
    Translated,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Translated => write!(f, "translated"),
        }
    }
}

/// Category of a formula-bearing region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "name")]
pub enum RegionKind {
    /// `$...$`
    Inline,
    /// `\[...\]` or `$$...$$`
    Display,
    /// Body of a whitelisted environment, carrying its name
    Environment(String),
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionKind::Inline => write!(f, "inline"),
            RegionKind::Display => write!(f, "display"),
            RegionKind::Environment(name) => write!(f, "{}", name),
        }
    }
}

/// Order in which the extractor returns regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionOrder {
    /// Sorted by position in the document
    #[default]
    Document,
    /// All inline regions, then display, then environments, each in document order
    Category,
}

/// A mathematically significant substring of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Document the region was extracted from
    pub side: Side,
    /// 0-based position in extraction order within its document
    pub ordinal: usize,
    /// Region category
    pub kind: RegionKind,
    /// Text between the delimiters, untouched
    pub raw: String,
    /// Byte offset of the opening delimiter in the comment-stripped text
    pub offset: usize,
    /// 1-based line of the opening delimiter
    pub line: usize,
}

impl Region {
    /// Human-facing block number (1-based)
    pub fn number(&self) -> usize {
        self.ordinal + 1
    }
}
