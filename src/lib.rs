/*!
 * # mathcheck - Formula preservation checker for translated LaTeX
 *
 * A Rust library that verifies a translated LaTeX document kept every
 * formula of its original, even though the surrounding prose changed.
 *
 * ## Features
 *
 * - Extract inline, display and environment math regions
 * - Normalize regions so formatting differences compare equal:
 *   - whitespace and line wrapping
 *   - annotation text (`\text{...}`, `\mbox{...}`)
 *   - trailing punctuation
 * - Align the two region sequences and report changed, missing and extra formulas
 * - Flag brace imbalance in the translated document
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration of a comparison run
 * - `extraction`: Region extraction:
 *   - `extraction::scanner`: Escape-aware scanning and comment stripping
 *   - `extraction::matchers`: One matcher per region category
 * - `normalization`: Canonical forms
 * - `alignment`: Edit scripts over canonical sequences
 * - `report`: Comparison results and console presentation
 * - `structure`: Brace balance check
 * - `checker`: Orchestration of a full comparison
 * - `file_utils`: Document loading
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod checker;
pub mod errors;
pub mod extraction;
pub mod file_utils;
pub mod normalization;
pub mod report;
pub mod structure;

// Re-export main types for easier usage
pub use app_config::Config;
pub use checker::{MathChecker, compare};
pub use errors::{AppError, CheckerError};
pub use extraction::{Region, RegionKind, Side, extract};
pub use normalization::normalize;
pub use report::{ComparisonResult, Discrepancy, DiscrepancyKind};
