/*!
 * Tests for region extraction
 */

use mathcheck::extraction::{MATH_ENVIRONMENTS, RegionExtractor, RegionKind, RegionOrder, Side, extract};
use crate::common;

fn raws(text: &str) -> Vec<String> {
    extract(text, Side::Original).into_iter().map(|r| r.raw).collect()
}

#[test]
fn test_extract_withEveryCategory_shouldFindAll() {
    let regions = extract(common::SMALL_DOCUMENT, Side::Original);

    assert_eq!(regions.len(), 3);
    assert_eq!(regions[0].kind, RegionKind::Inline);
    assert_eq!(regions[1].kind, RegionKind::Display);
    assert_eq!(regions[2].kind, RegionKind::Environment("equation".to_string()));
}

#[test]
fn test_extract_withEveryWhitelistedEnvironment_shouldMatchEach() {
    let text: String = MATH_ENVIRONMENTS
        .iter()
        .map(|name| format!("\\begin{{{0}}}body-{0}\\end{{{0}}}\n", name))
        .collect();

    let regions = extract(&text, Side::Original);

    assert_eq!(regions.len(), MATH_ENVIRONMENTS.len());
    for (region, name) in regions.iter().zip(MATH_ENVIRONMENTS) {
        assert_eq!(region.kind, RegionKind::Environment(name.to_string()));
        assert_eq!(region.raw, format!("body-{}", name));
    }
}

#[test]
fn test_extract_withStructuralEnvironments_shouldIgnoreThem() {
    let text = r"\begin{document}\begin{theorem}$x$\end{theorem}\end{document}";
    assert_eq!(raws(text), vec!["x"]);
}

#[test]
fn test_extract_withEscapedDollars_shouldTreatThemAsText() {
    let text = r"Price \$10 and \$20, formula $q$.";
    assert_eq!(raws(text), vec!["q"]);
}

#[test]
fn test_extract_withEscapedPercentInFormula_shouldKeepFormulaIntact() {
    let text = r"$50\%$ of $n$ % $hidden$";
    assert_eq!(raws(text), vec![r"50\%", "n"]);
}

#[test]
fn test_extract_withUnmatchedDollar_shouldNotFail() {
    let text = "An unmatched $ sign and a $y$";
    // The stray dollar pairs with the first one of `$y$`; the second is left over
    assert_eq!(raws(text), vec![" sign and a "]);
}

#[test]
fn test_extract_withCategoryOrder_shouldMatchLegacyConcatenation() {
    let text = r"\begin{align}a\end{align} \[b\] $c$";

    let legacy = RegionExtractor::with_order(RegionOrder::Category).extract(text, Side::Original);
    let document = RegionExtractor::new().extract(text, Side::Original);

    let legacy_raws: Vec<&str> = legacy.iter().map(|r| r.raw.as_str()).collect();
    let document_raws: Vec<&str> = document.iter().map(|r| r.raw.as_str()).collect();
    assert_eq!(legacy_raws, vec!["c", "b", "a"]);
    assert_eq!(document_raws, vec!["a", "b", "c"]);
}

#[test]
fn test_extract_shouldNumberRegionsConsecutively() {
    let regions = extract("$a$ $b$ $c$", Side::Translated);
    let numbers: Vec<usize> = regions.iter().map(|r| r.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_extract_withResourceDocument_shouldFindSixRegions() {
    let text = common::read_resource("original.tex");
    let regions = extract(&text, Side::Original);

    let kinds: Vec<String> = regions.iter().map(|r| r.kind.to_string()).collect();
    assert_eq!(
        kinds,
        vec!["inline", "inline", "inline", "equation", "display", "align*"]
    );
}
