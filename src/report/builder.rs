/*!
 * Turns an edit script into discrepancy entries.
 */

use log::debug;

use crate::alignment::{EditScript, OpTag};
use crate::extraction::Region;

use super::model::{ComparisonResult, Discrepancy};

/// Build the comparison result for two aligned region sequences
///
/// Every element covered by a non-equal opcode yields one entry. A replace
/// over ranges of different lengths pairs elements positionally and reports
/// the surplus as missing or extra. Region counts are carried on the result;
/// a count difference only shows up through those entries.
pub fn build_report(
    script: &EditScript,
    original: &[Region],
    translated: &[Region],
) -> ComparisonResult {
    let mut discrepancies = Vec::new();

    for op in script.changes() {
        let orig = &original[op.original_range()];
        let trans = &translated[op.translated_range()];

        match op.tag {
            OpTag::Replace => {
                for (o, t) in orig.iter().zip(trans) {
                    discrepancies.push(Discrepancy::ContentChange {
                        original: o.clone(),
                        translated: t.clone(),
                    });
                }
                discrepancies.extend(orig.iter().skip(trans.len()).cloned().map(missing));
                discrepancies.extend(trans.iter().skip(orig.len()).cloned().map(extra));
            }
            OpTag::Delete => discrepancies.extend(orig.iter().cloned().map(missing)),
            OpTag::Insert => discrepancies.extend(trans.iter().cloned().map(extra)),
            OpTag::Equal => {}
        }
    }

    debug!(
        "Report: {} discrepancies over {} vs {} regions",
        discrepancies.len(),
        original.len(),
        translated.len()
    );

    ComparisonResult {
        passed: discrepancies.is_empty(),
        original_count: original.len(),
        translated_count: translated.len(),
        discrepancies,
        imbalance: None,
    }
}

fn missing(original: Region) -> Discrepancy {
    Discrepancy::MissingInTranslation { original }
}

fn extra(translated: Region) -> Discrepancy {
    Discrepancy::ExtraInTranslation { translated }
}
