/*!
 * Console presentation of comparison results.
 *
 * The `Presenter` owns the color choice for the run. Anything that prints
 * report lines goes through a presenter handle; no process-wide color state
 * is touched.
 */

use std::io::{self, Write};

use colored::Colorize;

use crate::extraction::Region;
use crate::structure::BraceImbalance;

use super::model::{ComparisonResult, Discrepancy};

/// Default number of characters shown per snippet
pub const DEFAULT_SNIPPET_WIDTH: usize = 60;

/// Role of a report line, mapped to a color
#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Change,
    Missing,
    Extra,
    Warning,
    Pass,
    Fail,
}

/// Scoped console formatting context
pub struct Presenter {
    color: bool,
    width: usize,
}

impl Presenter {
    pub fn new(color: bool, width: usize) -> Self {
        Self { color, width }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        let painted = match tone {
            Tone::Info => text.cyan(),
            Tone::Change => text.yellow().bold(),
            Tone::Missing => text.red().bold(),
            Tone::Extra => text.magenta().bold(),
            Tone::Warning => text.yellow().bold(),
            Tone::Pass => text.green().bold(),
            Tone::Fail => text.red().bold(),
        };
        painted.to_string()
    }

    /// Header announcing the comparison
    pub fn header(&self, out: &mut impl Write, original: &str, translated: &str) -> io::Result<()> {
        let line = format!("[*] Comparing math regions: {} -> {}", original, translated);
        writeln!(out, "{}", self.paint(&line, Tone::Info))
    }

    /// Print the whole report: discrepancies, imbalance warning, summary and banner
    pub fn report(&self, out: &mut impl Write, result: &ComparisonResult, passed: bool) -> io::Result<()> {
        for discrepancy in &result.discrepancies {
            self.discrepancy(out, discrepancy)?;
        }

        if let Some(imbalance) = &result.imbalance {
            self.imbalance(out, imbalance)?;
        }

        self.summary(out, result)?;
        self.banner(out, passed)
    }

    /// One discrepancy block
    pub fn discrepancy(&self, out: &mut impl Write, discrepancy: &Discrepancy) -> io::Result<()> {
        match discrepancy {
            Discrepancy::ContentChange { original, translated } => {
                writeln!(
                    out,
                    "{} {}",
                    self.paint("[~] Changed:", Tone::Change),
                    location(original)
                )?;
                writeln!(out, "    Orig:  {}", self.snippet(original))?;
                writeln!(out, "    Trans: {} ({})", self.snippet(translated), location(translated))
            }
            Discrepancy::MissingInTranslation { original } => {
                writeln!(
                    out,
                    "{} {}",
                    self.paint("[-] Missing in translation:", Tone::Missing),
                    location(original)
                )?;
                writeln!(out, "    Orig:  {}", self.snippet(original))
            }
            Discrepancy::ExtraInTranslation { translated } => {
                writeln!(
                    out,
                    "{} {}",
                    self.paint("[+] Extra in translation:", Tone::Extra),
                    location(translated)
                )?;
                writeln!(out, "    Trans: {}", self.snippet(translated))
            }
        }
    }

    fn imbalance(&self, out: &mut impl Write, imbalance: &BraceImbalance) -> io::Result<()> {
        writeln!(out, "{}", self.paint("[!] Brace imbalance in translation:", Tone::Warning))?;
        writeln!(out, "    {}", imbalance)
    }

    fn summary(&self, out: &mut impl Write, result: &ComparisonResult) -> io::Result<()> {
        if result.discrepancies.is_empty() {
            let line = format!("[+] All {} math regions are identical.", result.original_count);
            writeln!(out, "{}", self.paint(&line, Tone::Pass))
        } else {
            let line = format!(
                "[-] Found {} discrepancies in total ({} regions in original, {} in translation).",
                result.discrepancies.len(),
                result.original_count,
                result.translated_count
            );
            writeln!(out, "{}", self.paint(&line, Tone::Fail))
        }
    }

    fn banner(&self, out: &mut impl Write, passed: bool) -> io::Result<()> {
        let banner = if passed {
            self.paint("✔ COMPARISON OK: the documents match mathematically.", Tone::Pass)
        } else {
            self.paint("✘ COMPARISON FAILED.", Tone::Fail)
        };
        writeln!(out)?;
        writeln!(out, "{}", banner)
    }

    fn snippet(&self, region: &Region) -> String {
        truncate_snippet(&single_line(&region.raw), self.width)
    }
}

/// `#3 (line 12, equation)`
fn location(region: &Region) -> String {
    format!("#{} (line {}, {})", region.number(), region.line, region.kind)
}

/// Collapse runs of whitespace so a snippet fits on one line
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `width` characters, marking the cut with `...`
pub fn truncate_snippet(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
