/*!
 * Sequence alignment of canonical regions.
 *
 * Produces an edit script over two sequences using longest-common-subsequence
 * style matching (Myers' algorithm from the `similar` crate), so a region
 * added or dropped in the middle of a document shows up as one local insert
 * or delete instead of shifting every later pair into a mismatch.
 *
 * When canonical strings repeat, several equally long alignments may exist;
 * the one chosen is whichever the diff routine finds first. Adjacent
 * delete/insert runs are merged into a single replace.
 */

use std::ops::Range;

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffTag, capture_diff_slices};

/// Kind of an edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    Equal,
    Replace,
    Insert,
    Delete,
}

impl From<DiffTag> for OpTag {
    fn from(tag: DiffTag) -> Self {
        match tag {
            DiffTag::Equal => OpTag::Equal,
            DiffTag::Replace => OpTag::Replace,
            DiffTag::Insert => OpTag::Insert,
            DiffTag::Delete => OpTag::Delete,
        }
    }
}

/// One operation over `orig[i1..i2]` and `trans[j1..j2]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl Opcode {
    pub fn new(tag: OpTag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self { tag, i1, i2, j1, j2 }
    }

    pub fn original_range(&self) -> Range<usize> {
        self.i1..self.i2
    }

    pub fn translated_range(&self) -> Range<usize> {
        self.j1..self.j2
    }
}

/// Ordered, gap-free list of opcodes covering both sequences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    pub opcodes: Vec<Opcode>,
}

impl EditScript {
    /// Whether every opcode is `Equal`
    pub fn is_identity(&self) -> bool {
        self.opcodes.iter().all(|op| op.tag == OpTag::Equal)
    }

    /// Opcodes that describe a difference
    pub fn changes(&self) -> impl Iterator<Item = &Opcode> {
        self.opcodes.iter().filter(|op| op.tag != OpTag::Equal)
    }

    /// Check that opcodes are contiguous and cover `0..orig_len` and `0..trans_len`
    pub fn covers(&self, orig_len: usize, trans_len: usize) -> bool {
        let mut i = 0;
        let mut j = 0;
        for op in &self.opcodes {
            if op.i1 != i || op.j1 != j || op.i2 < op.i1 || op.j2 < op.j1 {
                return false;
            }
            i = op.i2;
            j = op.j2;
        }
        i == orig_len && j == trans_len
    }
}

/// Align two canonical sequences
pub fn align<T: AsRef<str>>(original: &[T], translated: &[T]) -> EditScript {
    let orig: Vec<&str> = original.iter().map(AsRef::as_ref).collect();
    let trans: Vec<&str> = translated.iter().map(AsRef::as_ref).collect();

    let opcodes = capture_diff_slices(Algorithm::Myers, &orig, &trans)
        .iter()
        .map(|op| {
            let (tag, old, new) = op.as_tag_tuple();
            Opcode::new(tag.into(), old.start, old.end, new.start, new.end)
        })
        .collect();

    EditScript { opcodes }
}
