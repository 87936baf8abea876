/*!
 * Canonical forms for region comparison.
 *
 * Two regions are considered equal when their canonical forms are equal.
 * Normalization removes differences a translator may legitimately introduce:
 * - Whitespace and line wrapping anywhere in the formula
 * - Free-form text inside annotation commands (`\text{...}`, `\mbox{...}`)
 * - Trailing periods and commas moved across the closing delimiter
 *
 * Braces are never touched: `x^2` and `x^{2}` stay different.
 */

/// Commands whose argument is human-readable text
pub const ANNOTATION_COMMANDS: [&str; 2] = [r"\text", r"\mbox"];

/// Replacement for the argument of an annotation command
pub const ANNOTATION_SENTINEL: &str = "…";

/// Normalize raw region text to its canonical form
pub fn normalize(raw: &str) -> String {
    let compact: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();
    let masked = mask_annotations(&compact);
    masked.trim_end_matches(['.', ',']).to_string()
}

/// Replace the brace-balanced argument of every annotation command with the sentinel
///
/// An annotation whose argument is never closed is left as is.
fn mask_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some((start, command)) = find_annotation(rest) {
        let arg_start = start + command.len();
        match closing_brace(&rest[arg_start..]) {
            Some(arg_len) => {
                out.push_str(&rest[..arg_start]);
                out.push('{');
                out.push_str(ANNOTATION_SENTINEL);
                out.push('}');
                rest = &rest[arg_start + arg_len..];
            }
            None => {
                out.push_str(&rest[..arg_start]);
                rest = &rest[arg_start..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// First annotation command immediately followed by `{`
fn find_annotation(text: &str) -> Option<(usize, &'static str)> {
    ANNOTATION_COMMANDS
        .iter()
        .flat_map(|&command| {
            text.match_indices(command)
                .filter(move |(idx, _)| text[idx + command.len()..].starts_with('{'))
                .map(move |(idx, _)| (idx, command))
        })
        .min_by_key(|&(idx, _)| idx)
}

/// Length of a brace group starting at `text[0] == '{'`, including both braces
fn closing_brace(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }

    None
}
