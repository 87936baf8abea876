/*!
 * Escape-aware character scanning.
 *
 * A backslash escapes the character after it unless the backslash is itself
 * escaped, so in `\\%` the percent sign is a live comment marker while in
 * `\%` it is literal text.
 */

use std::str::CharIndices;

/// Escape character of the document language
pub const ESCAPE: char = '\\';

/// Comment marker; everything after an unescaped one is dropped up to end of line
pub const COMMENT: char = '%';

/// Iterator over the characters of a text that are not escaped
///
/// Yields `(byte_offset, char)`. Escaping backslashes are themselves yielded,
/// since they are not escaped.
pub struct Unescaped<'a> {
    chars: CharIndices<'a>,
    escaped: bool,
}

impl<'a> Unescaped<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            escaped: false,
        }
    }
}

impl Iterator for Unescaped<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, ch) = self.chars.next()?;
            let was_escaped = self.escaped;
            self.escaped = ch == ESCAPE && !was_escaped;
            if !was_escaped {
                return Some((idx, ch));
            }
        }
    }
}

/// Byte offsets of every unescaped occurrence of `target`
pub fn unescaped_positions(text: &str, target: char) -> Vec<usize> {
    Unescaped::new(text)
        .filter(|&(_, ch)| ch == target)
        .map(|(idx, _)| idx)
        .collect()
}

/// Remove comments, keeping line breaks so line numbers stay valid
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut escaped = false;
    let mut in_comment = false;

    for ch in text.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                escaped = false;
                out.push(ch);
            }
            continue;
        }

        if ch == COMMENT && !escaped {
            in_comment = true;
            continue;
        }

        out.push(ch);
        escaped = ch == ESCAPE && !escaped;
    }

    out
}
