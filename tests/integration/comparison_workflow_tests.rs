/*!
 * End-to-end comparison tests over real documents
 */

use anyhow::Result;
use mathcheck::app_config::{Config, OutputFormat};
use mathcheck::{ComparisonResult, Discrepancy, DiscrepancyKind, MathChecker, compare};
use crate::common;

#[test]
fn test_compare_withFaithfulTranslation_shouldPass() {
    let original = common::read_resource("original.tex");
    let translated = common::read_resource("translated.tex");

    let result = compare(&original, &translated);

    assert!(result.passed, "unexpected discrepancies: {:?}", result.discrepancies);
    assert_eq!(result.original_count, 6);
    assert_eq!(result.translated_count, 6);
    assert!(result.imbalance.is_none());
}

#[test]
fn test_compare_withDocumentAgainstItself_shouldPass() {
    for name in ["original.tex", "translated.tex", "translated_broken.tex"] {
        let text = common::read_resource(name);
        assert!(compare(&text, &text).passed, "{} should match itself", name);
    }
}

#[test]
fn test_compare_withBrokenTranslation_shouldLocalizeBothErrors() {
    let original = common::read_resource("original.tex");
    let translated = common::read_resource("translated_broken.tex");

    let result = compare(&original, &translated);

    assert!(!result.passed);
    assert_eq!(result.original_count, 6);
    assert_eq!(result.translated_count, 5);
    assert_eq!(result.discrepancies.len(), 2);
    assert_eq!(result.count_of(DiscrepancyKind::MissingInTranslation), 1);
    assert_eq!(result.count_of(DiscrepancyKind::ContentChange), 1);
    assert_eq!(result.count_of(DiscrepancyKind::ExtraInTranslation), 0);

    let missing = result.discrepancies.iter().find_map(|d| match d {
        Discrepancy::MissingInTranslation { original } => Some(original),
        _ => None,
    });
    assert_eq!(missing.map(|r| r.raw.as_str()), Some("c"));
}

#[test]
fn test_compare_withRenamedEnvironment_shouldReportMissing() {
    let original = r"Text $a$ \begin{equation}x = 1\end{equation} $b$";
    let translated = r"Teksti $a$ \begin{theorem}x = 1\end{theorem} $b$";

    let result = compare(original, translated);

    assert_eq!(result.discrepancies.len(), 1);
    assert_eq!(result.count_of(DiscrepancyKind::MissingInTranslation), 1);
    assert!(!result.passed);
}

#[test]
fn test_compare_withWhitelistedRename_shouldReportEnvironmentChange() {
    let original = r"\begin{equation}x = 1\end{equation}";
    let translated = r"\begin{align}x = 1\end{align}";

    let result = compare(original, translated);

    assert!(!result.passed);
    assert_eq!(result.discrepancies.len(), 1);
    assert_eq!(result.count_of(DiscrepancyKind::ContentChange), 1);
}

#[test]
fn test_compare_withPeriodMovedOutside_shouldPass() {
    let original = "Thus $x = 1.$ Next.";
    let translated = "Siis $x = 1$. Seuraavaksi.";

    assert!(compare(original, translated).passed);
}

#[test]
fn test_compare_withWhitespaceEdits_shouldPass() {
    let original = "\\[ \\frac{a}{b} + c \\]";
    let translated = "\\[\n  \\frac{a}{b}\n  + c\n\\]";

    assert!(compare(original, translated).passed);
}

#[test]
fn test_compare_withExtraFormulaInMiddle_shouldReportOnlyInsert() {
    let original = "$x+y$ text $a=b$ text $c-d$";
    let translated = "$x+y$ teksti $a=b$ ja $e=f$ teksti $c-d$";

    let result = compare(original, translated);

    assert!(!result.passed);
    assert_eq!(result.discrepancies.len(), 1);
    match &result.discrepancies[0] {
        Discrepancy::ExtraInTranslation { translated } => assert_eq!(translated.raw, "e=f"),
        other => panic!("Expected extra entry, got {:?}", other),
    }
}

#[test]
fn test_compare_withBracedExponent_shouldReportChange() {
    let result = compare("$x^2$", "$x^{2}$");
    assert_eq!(result.count_of(DiscrepancyKind::ContentChange), 1);
}

#[test]
fn test_run_withJsonFormat_shouldEmitParsableResult() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let original = common::create_test_file(dir.path(), "a.tex", "$a$ $b$")?;
    let translated = common::create_test_file(dir.path(), "b.tex", "$a$")?;

    let checker = MathChecker::with_config(Config {
        output_format: OutputFormat::Json,
        ..Config::default()
    });
    let mut out = Vec::new();
    let passed = checker.run(&original, &translated, &mut out)?;

    assert!(!passed);
    let parsed: ComparisonResult = serde_json::from_slice(&out)?;
    assert_eq!(parsed.original_count, 2);
    assert_eq!(parsed.count_of(DiscrepancyKind::MissingInTranslation), 1);

    Ok(())
}

#[test]
fn test_run_withTextFormat_shouldPrintHeaderAndBanner() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let original = common::create_test_file(dir.path(), "a.tex", common::SMALL_DOCUMENT)?;
    let translated = common::create_test_file(dir.path(), "b.tex", common::SMALL_DOCUMENT)?;

    let checker = MathChecker::with_config(Config {
        color: false,
        ..Config::default()
    });
    let mut out = Vec::new();
    let passed = checker.run(&original, &translated, &mut out)?;
    let text = String::from_utf8(out)?;

    assert!(passed);
    assert!(text.starts_with("[*] Comparing math regions"));
    assert!(text.contains("All 3 math regions are identical"));
    assert!(text.contains("COMPARISON OK"));

    Ok(())
}

#[test]
fn test_run_withMissingInput_shouldFailBeforeComparing() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let original = common::create_test_file(dir.path(), "a.tex", "$a$")?;
    let missing = dir.path().join("missing.tex");

    let mut out = Vec::new();
    let result = MathChecker::default().run(&original, &missing, &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());

    Ok(())
}
