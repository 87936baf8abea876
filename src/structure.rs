/*!
 * Structural sanity check for a single document.
 *
 * Counts unescaped `{` and `}` outside comments. A translation that drops or
 * duplicates a brace usually breaks compilation, and this check catches it
 * without needing the original document. The result is reported separately
 * from the region comparison.
 */

use log::warn;
use serde::{Deserialize, Serialize};

use crate::extraction::scanner::{Unescaped, strip_comments};

/// Unequal brace counts in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BraceImbalance {
    pub open: usize,
    pub close: usize,
}

impl std::fmt::Display for BraceImbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{{' vs {} '}}'", self.open, self.close)
    }
}

/// Return the imbalance of `text`, or `None` when the counts agree
pub fn check_braces(text: &str) -> Option<BraceImbalance> {
    let clean = strip_comments(text);
    let (open, close) = Unescaped::new(&clean).fold((0, 0), |(open, close), (_, ch)| match ch {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    });

    if open == close {
        return None;
    }

    warn!("Brace imbalance: {} opening vs {} closing", open, close);
    Some(BraceImbalance { open, close })
}
