/*!
 * Named matchers, one per region category.
 *
 * Each matcher is a pure function from text to an iterator of `RawMatch`
 * values. Matchers run on comment-stripped text and do not recurse: a
 * delimiter of another category inside a match is plain interior text of
 * that match. The scans are still independent, so `$x$` inside either
 * `\[...\]` or `$$...$$` is also reported by the inline scan.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::scanner::unescaped_positions;

/// Environment names whose bodies are pure formula content
pub const MATH_ENVIRONMENTS: [&str; 11] = [
    "equation",
    "equation*",
    "align",
    "align*",
    "gather",
    "gather*",
    "split",
    "multline",
    "multline*",
    "alignat",
    "alignat*",
];

/// Inline formula delimiter
pub const INLINE_DELIMITER: char = '$';

/// Regex for bracketed display math; lazy so the first close marker ends the span
static DISPLAY_BRACKET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\\[(.*?)\\\]").expect("Invalid display math regex")
});

/// Regex for the begin marker of a whitelisted environment
static BEGIN_ENVIRONMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\\begin\{(equation\*|equation|align\*|align|gather\*|gather|split|multline\*|multline|alignat\*|alignat)\}",
    )
    .expect("Invalid environment regex")
});

/// A matched span: `start..end` covers the delimiters, `captured` is the interior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub captured: &'a str,
    /// Environment name for environment matches
    pub name: Option<&'a str>,
}

/// A span delimited by unescaped dollar signs
#[derive(Debug, Clone, Copy)]
struct DollarSpan {
    start: usize,
    end: usize,
    double: bool,
}

/// Pair up unescaped dollar signs
///
/// An adjacent pair `$$` opens a double span that runs to the next adjacent
/// pair; an unmatched opener contributes nothing. Single dollars inside a
/// double span pair up among themselves.
fn dollar_spans(text: &str) -> Vec<DollarSpan> {
    let positions = unescaped_positions(text, INLINE_DELIMITER);
    let is_double_at = |k: usize| k + 1 < positions.len() && positions[k] + 1 == positions[k + 1];

    let mut spans = Vec::new();
    let mut k = 0;
    while k < positions.len() {
        if is_double_at(k) {
            let close = (k + 2..positions.len()).find(|&c| is_double_at(c));
            match close {
                Some(c) => {
                    spans.push(DollarSpan {
                        start: positions[k],
                        end: positions[c + 1] + 1,
                        double: true,
                    });
                    spans.extend(positions[k + 2..c].chunks_exact(2).map(|pair| DollarSpan {
                        start: pair[0],
                        end: pair[1] + 1,
                        double: false,
                    }));
                    k = c + 2;
                }
                None => break,
            }
        } else if k + 1 < positions.len() {
            spans.push(DollarSpan {
                start: positions[k],
                end: positions[k + 1] + 1,
                double: false,
            });
            k += 2;
        } else {
            break;
        }
    }

    spans
}

/// Inline formulas between single unescaped `$` delimiters
pub fn inline_formulas(text: &str) -> impl Iterator<Item = RawMatch<'_>> {
    dollar_spans(text)
        .into_iter()
        .filter(|span| !span.double)
        .map(move |span| RawMatch {
            start: span.start,
            end: span.end,
            captured: &text[span.start + 1..span.end - 1],
            name: None,
        })
}

/// Display formulas between `\[` and `\]`, or between `$$` pairs
pub fn display_formulas(text: &str) -> impl Iterator<Item = RawMatch<'_>> {
    let bracketed = DISPLAY_BRACKET_REGEX.captures_iter(text).filter_map(|cap| {
        let whole = cap.get(0)?;
        let inner = cap.get(1)?;
        Some(RawMatch {
            start: whole.start(),
            end: whole.end(),
            captured: inner.as_str(),
            name: None,
        })
    });

    let doubled = dollar_spans(text)
        .into_iter()
        .filter(|span| span.double)
        .map(move |span| RawMatch {
            start: span.start,
            end: span.end,
            captured: &text[span.start + 2..span.end - 2],
            name: None,
        });

    let mut matches: Vec<RawMatch<'_>> = bracketed.chain(doubled).collect();
    matches.sort_by_key(|m| m.start);
    matches.into_iter()
}

/// Bodies of whitelisted environments
///
/// A span closes at the first `\end{NAME}` carrying the same name as its
/// `\begin{NAME}`; an end marker with a different name is interior text.
pub fn math_environments(text: &str) -> impl Iterator<Item = RawMatch<'_>> {
    let mut consumed = 0;
    BEGIN_ENVIRONMENT_REGEX
        .captures_iter(text)
        .filter_map(move |cap| {
            let begin = cap.get(0)?;
            let name = cap.get(1)?.as_str();
            if begin.start() < consumed {
                return None;
            }

            let end_marker = format!("\\end{{{}}}", name);
            let body_start = begin.end();
            let body_len = text[body_start..].find(&end_marker)?;
            let end = body_start + body_len + end_marker.len();
            consumed = end;

            Some(RawMatch {
                start: begin.start(),
                end,
                captured: &text[body_start..body_start + body_len],
                name: Some(name),
            })
        })
}
