use super::*;

fn vw_1000() -> Rewriter {
    Rewriter::new(
        ViewportUnit::Vw,
        ViewportSize::new(1000.0, 500.0).unwrap(),
        4,
    )
    .unwrap()
}

#[test]
fn lines_without_px_pass_through_verbatim() {
    let mut report = ConversionReport::default();
    for line in ["body {\n", "  color: red;\n", "}\r\n", "  /* spacing */"] {
        let out = vw_1000().rewrite_line(1, line, &mut report).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, line);
    }
    assert_eq!(report.lines_rewritten, 0);
}

#[test]
fn px_line_is_rebuilt_with_tab_and_single_semicolon() {
    let mut report = ConversionReport::default();
    let out = vw_1000()
        .rewrite_line(1, "  width: 100px;\n", &mut report)
        .unwrap();
    assert_eq!(out, "\twidth: 10.0vw;\n");
    assert_eq!(report.tokens_converted, 1);
    assert_eq!(report.lines_rewritten, 1);
}

#[test]
fn every_px_token_in_a_line_converts() {
    let mut report = ConversionReport::default();
    let r = vw_1000();
    assert_eq!(
        r.rewrite_line(1, "margin: 10px 20px;\n", &mut report).unwrap(),
        "\tmargin: 1.0vw 2.0vw;\n"
    );
    assert_eq!(
        r.rewrite_line(2, "border: 1px solid red;", &mut report).unwrap(),
        "\tborder: 0.1vw solid red;\n"
    );
    assert_eq!(report.tokens_converted, 3);
}

#[test]
fn lines_mentioning_px_are_reformatted_even_without_lengths() {
    let mut report = ConversionReport::default();
    let out = vw_1000().rewrite_line(4, ".w-px {\n", &mut report).unwrap();
    assert_eq!(out, "\t.w-px {;\n");
    assert_eq!(report.tokens_converted, 0);
    assert!(report.skipped.is_empty());
}

#[test]
fn skipped_tokens_are_reported_with_line_numbers() {
    let text = "a {\n  top: px;\n  left: abcpx;\n}\n";
    let (out, report) = vw_1000().convert_str(text).unwrap();

    assert_eq!(out, "a {\n\ttop: px;\n\tleft: abcpx;\n}\n");
    assert_eq!(
        report.skipped,
        vec![
            SkippedToken {
                line: 2,
                token: "px".to_string(),
                reason: SkipReason::EmptyLiteral,
            },
            SkippedToken {
                line: 3,
                token: "abcpx".to_string(),
                reason: SkipReason::InvalidNumber,
            },
        ]
    );
}

#[test]
fn strict_mode_rejects_malformed_lengths() {
    let text = "a {\n  left: abcpx;\n}\n";
    let err = vw_1000().strict(true).convert_str(text).unwrap_err();
    match err {
        PxvwError::NumericParse { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "abcpx");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Empty literals are not parse failures.
    let (out, _) = vw_1000().strict(true).convert_str("top: px;\n").unwrap();
    assert_eq!(out, "\ttop: px;\n");
}

#[test]
fn convert_str_counts_lines_and_keeps_order() {
    let text = ".box {\n    width: 500px;\n    height: 250px;\n    display: flex;\n}\n";
    let v = ViewportSize::new(1000.0, 500.0).unwrap();

    let (out, report) = convert_str(text, ViewportUnit::Vh, v, 4).unwrap();
    assert_eq!(
        out,
        ".box {\n\twidth: 100.0vh;\n\theight: 50.0vh;\n    display: flex;\n}\n"
    );
    assert_eq!(report.lines_total, 5);
    assert_eq!(report.lines_rewritten, 2);
    assert_eq!(report.tokens_converted, 2);
    assert_eq!(report.output, None);
}

#[test]
fn converting_output_again_changes_nothing() {
    let text = "p {\n  font-size: 16px;\n  margin: 0 8px;\n}\n";
    let (once, _) = vw_1000().convert_str(text).unwrap();
    let (twice, report) = vw_1000().convert_str(&once).unwrap();
    assert_eq!(once, twice);
    assert_eq!(report.lines_rewritten, 0);
}

#[test]
fn empty_input_is_empty_output() {
    let (out, report) = vw_1000().convert_str("").unwrap();
    assert!(out.is_empty());
    assert_eq!(report, ConversionReport::default());
}

#[test]
fn rewriter_rejects_excess_precision() {
    let v = ViewportSize::new(1000.0, 500.0).unwrap();
    let too_many = crate::foundation::core::MAX_PRECISION + 1;
    assert!(Rewriter::new(ViewportUnit::Vw, v, too_many).is_err());
}

#[test]
fn strict_mode_reports_overflow_without_failing() {
    let tiny = Rewriter::new(ViewportUnit::Vw, ViewportSize::new(1e-300, 1.0).unwrap(), 4)
        .unwrap()
        .strict(true);
    let (out, report) = tiny.convert_str("  left: 1e10px;\n").unwrap();
    assert_eq!(out, "\tleft: 1e10px;\n");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].reason, SkipReason::Overflow);
}
