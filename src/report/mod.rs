/*!
 * Comparison reporting.
 *
 * # Architecture
 *
 * - `model`: `ComparisonResult` and discrepancy entries
 * - `builder`: turns an edit script into discrepancy entries and a verdict
 * - `presenter`: console rendering with a scoped color context
 */

pub mod builder;
pub mod model;
pub mod presenter;

// Re-export main types
pub use builder::build_report;
pub use model::{ComparisonResult, Discrepancy, DiscrepancyKind};
pub use presenter::{DEFAULT_SNIPPET_WIDTH, Presenter, truncate_snippet};
