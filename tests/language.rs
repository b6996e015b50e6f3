use std::fs::{self};

use shunt::{error::CalcError, evaluate_expression};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in extract_calc_lines(&content).into_iter().enumerate() {
            count += 1;
            let (expression, expected) = line.split_once("=>")
                                             .unwrap_or_else(|| panic!("Example {} in {:?} has no '=>': {line}",
                                                                       i + 1,
                                                                       path));
            let (expression, expected) = (expression.trim(), expected.trim());
            if expected == "error" {
                assert_failure(expression);
            } else {
                let expected: f64 =
                    expected.parse()
                            .unwrap_or_else(|e| panic!("Bad expected value in {path:?}: {e}"));
                assert_value(expression, expected);
            }
        }
    }

    assert!(count > 0, "No calculator examples found in book/src");
}

fn extract_calc_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```shunt") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(v) => assert!((v - expected).abs() < 1e-9,
                         "'{src}' evaluated to {v}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(v) = evaluate_expression(src) {
        panic!("'{src}' evaluated to {v} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("2 ^ 10", 1024.0);
    assert_value("42", 42.0);
}

#[test]
fn documented_scenarios() {
    assert_value("3+3*(3-1)", 9.0);
    assert_value("2+2", 4.0);
    assert_value("2+2-3+3-2", 2.0);
    assert_value("2+2*4/8-2", 1.0);
    assert_value("2/(2+2)*(2-3+2)+3-2", 1.5);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  3 +\t3 * ( 3 - 1 )\n", 9.0);
}

#[test]
fn left_associative_operators_group_left() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 * 3 / 4", 1.5);
}

#[test]
fn power_groups_right_and_binds_tightest() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("2*3^2", 18.0);
    assert_value("4^0.5", 2.0);
}

#[test]
fn fully_parenthesized_expressions_match_direct_arithmetic() {
    assert_value("((1.5 + 2.5) * (7 - 3)) / 8", ((1.5 + 2.5) * (7.0 - 3.0)) / 8.0);
    assert_value("(((2 * 3) - 4) + (9 / (1 + 2)))", ((2.0 * 3.0) - 4.0) + (9.0 / (1.0 + 2.0)));
    assert_value("((0.1 + 0.2) * 10)", (0.1 + 0.2) * 10.0);
}

#[test]
fn trailing_decimal_point_is_accepted() {
    assert_value("3. + 1", 4.0);
}

#[test]
fn division_by_zero_propagates_ieee_values() {
    assert_eq!(evaluate_expression("1/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate_expression("0-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate_expression("0/0").unwrap().is_nan());
    assert!(evaluate_expression("(0-8)^0.5").unwrap().is_nan());
    assert_value("0^0", 1.0);
}

#[test]
fn letters_are_rejected_by_the_lexer() {
    assert!(matches!(evaluate_expression("2 + x"), Err(CalcError::Lex(_))));
}

#[test]
fn unmatched_closing_paren_is_a_conversion_error() {
    assert!(matches!(evaluate_expression("2 + 3)"), Err(CalcError::Convert(_))));
}

#[test]
fn malformed_expressions_are_errors() {
    assert_failure("");
    assert_failure("1.2.3");
    assert_failure("(1 + 2");
    assert_failure("*1");
    assert_failure("1/");
    assert_failure("1 2");
    assert_failure("-1");
    assert_failure(".5");
    assert_failure("()");
}
