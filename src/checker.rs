/*!
 * Comparison orchestration.
 *
 * `MathChecker` runs the whole pipeline for one pair of documents:
 * load, extract, normalize, align, build the report, and check the
 * translated document's brace balance.
 */

use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::alignment::align;
use crate::app_config::{Config, OutputFormat};
use crate::errors::{AppError, CheckerError};
use crate::extraction::{Region, RegionExtractor, Side};
use crate::file_utils::FileManager;
use crate::normalization::normalize;
use crate::report::{ComparisonResult, Presenter, build_report};
use crate::structure::check_braces;

/// Compares the math content of an original document and its translation
pub struct MathChecker {
    config: Config,
    extractor: RegionExtractor,
}

impl MathChecker {
    /// Create a checker with the given configuration
    pub fn with_config(config: Config) -> Self {
        let extractor = RegionExtractor::with_order(config.region_order);
        Self { config, extractor }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare two documents held in memory
    pub fn compare_texts(&self, original: &str, translated: &str) -> ComparisonResult {
        let orig_regions = self.extractor.extract(original, Side::Original);
        let trans_regions = self.extractor.extract(translated, Side::Translated);

        let script = align(&canonical(&orig_regions), &canonical(&trans_regions));
        debug!("Edit script has {} opcodes", script.opcodes.len());

        let mut result = build_report(&script, &orig_regions, &trans_regions);
        result.imbalance = check_braces(translated);
        result
    }

    /// Load and compare two documents
    ///
    /// Fails before any comparison if either file is missing.
    pub fn compare_files(&self, original: &Path, translated: &Path) -> Result<ComparisonResult, CheckerError> {
        let original_text = FileManager::read_document(original)?;
        let translated_text = FileManager::read_document(translated)?;

        info!("Comparing {:?} against {:?}", original, translated);
        Ok(self.compare_texts(&original_text, &translated_text))
    }

    /// Compare two files and write the report to `out`
    ///
    /// Returns the final verdict.
    pub fn run(&self, original: &Path, translated: &Path, out: &mut impl Write) -> Result<bool, AppError> {
        let result = self.compare_files(original, translated)?;
        let passed = result.verdict(self.config.fail_on_imbalance);

        match self.config.output_format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &result)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                let presenter = Presenter::new(self.config.color, self.config.snippet_width);
                presenter.header(out, &original.display().to_string(), &translated.display().to_string())?;
                presenter.report(out, &result, passed)?;
            }
        }

        Ok(passed)
    }
}

impl Default for MathChecker {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

/// Compare two documents with the default configuration
pub fn compare(original: &str, translated: &str) -> ComparisonResult {
    MathChecker::default().compare_texts(original, translated)
}

/// Alignment keys: the region kind followed by its canonical form, so a
/// changed environment type never compares equal
fn canonical(regions: &[Region]) -> Vec<String> {
    regions
        .iter()
        .map(|r| format!("{}:{}", r.kind, normalize(&r.raw)))
        .collect()
}
