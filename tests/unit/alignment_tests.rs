/*!
 * Tests for sequence alignment
 */

use mathcheck::alignment::{OpTag, Opcode, align};
use proptest::prelude::*;

#[test]
fn test_align_withDocumentedExample_shouldProduceExactScript() {
    let orig = ["x+y", "a=b", "c-d"];
    let trans = ["x+y", "a=b", "e=f", "c-d"];

    let script = align(&orig, &trans);

    assert_eq!(
        script.opcodes,
        vec![
            Opcode::new(OpTag::Equal, 0, 2, 0, 2),
            Opcode::new(OpTag::Insert, 2, 2, 2, 3),
            Opcode::new(OpTag::Equal, 2, 3, 3, 4),
        ]
    );
}

#[test]
fn test_align_withRemovedMiddle_shouldNotCascade() {
    let orig = ["a", "b", "c", "d", "e"];
    let trans = ["a", "b", "d", "e"];

    let script = align(&orig, &trans);

    let changes: Vec<&Opcode> = script.changes().collect();
    assert_eq!(changes, vec![&Opcode::new(OpTag::Delete, 2, 3, 2, 2)]);
}

#[test]
fn test_align_withSeveralEdits_shouldKeepEditsLocal() {
    let orig = ["a", "b", "c", "d", "e", "f"];
    let trans = ["a", "X", "c", "d", "f", "g"];

    let script = align(&orig, &trans);

    let tags: Vec<OpTag> = script.changes().map(|op| op.tag).collect();
    assert_eq!(tags, vec![OpTag::Replace, OpTag::Delete, OpTag::Insert]);
    assert!(script.covers(orig.len(), trans.len()));
}

proptest! {
    #[test]
    fn prop_align_coversBothSequences(
        orig in prop::collection::vec("[abc]", 0..12),
        trans in prop::collection::vec("[abc]", 0..12),
    ) {
        let script = align(&orig, &trans);
        prop_assert!(script.covers(orig.len(), trans.len()));
    }

    #[test]
    fn prop_align_withSelf_isIdentity(seq in prop::collection::vec("[a-e]{1,3}", 0..12)) {
        let script = align(&seq, &seq);
        prop_assert!(script.is_identity());
    }

    #[test]
    fn prop_align_equalRangesHoldEqualElements(
        orig in prop::collection::vec("[ab]", 0..10),
        trans in prop::collection::vec("[ab]", 0..10),
    ) {
        let script = align(&orig, &trans);
        for op in script.opcodes.iter().filter(|op| op.tag == OpTag::Equal) {
            prop_assert_eq!(&orig[op.original_range()], &trans[op.translated_range()]);
        }
    }
}
