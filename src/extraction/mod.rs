/*!
 * Region extraction.
 *
 * Locates every formula-bearing region of a LaTeX document:
 * - Comments are stripped first (unescaped `%` to end of line)
 * - Inline formulas (`$...$`)
 * - Display formulas (`\[...\]`, `$$...$$`)
 * - Bodies of whitelisted math environments (`equation`, `align*`, ...)
 *
 * # Architecture
 *
 * - `scanner`: escape-aware scanning and comment stripping
 * - `matchers`: one matcher per region category
 * - `region`: the `Region` data model
 */

pub mod matchers;
pub mod region;
pub mod scanner;

use log::debug;

pub use matchers::{MATH_ENVIRONMENTS, RawMatch};
pub use region::{Region, RegionKind, RegionOrder, Side};

/// Extracts regions from document text
#[derive(Debug, Clone, Default)]
pub struct RegionExtractor {
    order: RegionOrder,
}

impl RegionExtractor {
    /// Create an extractor returning regions in document order
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with an explicit ordering policy
    pub fn with_order(order: RegionOrder) -> Self {
        Self { order }
    }

    /// Extract all regions of `text`, numbering them in the configured order
    pub fn extract(&self, text: &str, side: Side) -> Vec<Region> {
        let clean = scanner::strip_comments(text);
        let lines = LineIndex::new(&clean);

        let inline = matchers::inline_formulas(&clean).map(|m| (m, RegionKind::Inline));
        let display = matchers::display_formulas(&clean).map(|m| (m, RegionKind::Display));
        let environments = matchers::math_environments(&clean).map(|m| {
            let kind = RegionKind::Environment(m.name.unwrap_or_default().to_string());
            (m, kind)
        });

        let mut found: Vec<(RawMatch<'_>, RegionKind)> =
            inline.chain(display).chain(environments).collect();

        if self.order == RegionOrder::Document {
            // Stable, so equal offsets keep category order
            found.sort_by_key(|(m, _)| m.start);
        }

        let regions: Vec<Region> = found
            .into_iter()
            .enumerate()
            .map(|(ordinal, (m, kind))| Region {
                side,
                ordinal,
                kind,
                raw: m.captured.to_string(),
                offset: m.start,
                line: lines.line_of(m.start),
            })
            .collect();

        debug!(
            "Extracted {} regions from {} document ({:?} order)",
            regions.len(),
            side,
            self.order
        );

        regions
    }
}

/// Extract regions in document order
pub fn extract(text: &str, side: Side) -> Vec<Region> {
    RegionExtractor::new().extract(text, side)
}

/// Maps byte offsets to 1-based line numbers
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }
}
