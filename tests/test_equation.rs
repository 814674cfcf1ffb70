//! Tests for equation parsing through the public API

use kmap_logic::equation::parse_equation;
use kmap_logic::{parse, simplify, EquationError, KmapError, VarCount};

#[test]
fn test_two_variable_xor() {
    let cells = parse("F = A'B + AB'", VarCount::Two).unwrap();
    assert_eq!(cells.values(), vec![0, 1, 1, 0]);
}

#[test]
fn test_three_variable_minterms_land_in_gray_order() {
    let cells = parse("F = A'B'C' + AB'C", VarCount::Three).unwrap();
    assert_eq!(cells.minterms(), vec![0, 5]);
    assert_eq!(cells.values(), vec![1, 0, 0, 0, 0, 1, 0, 0]);
}

#[test]
fn test_partial_equation_keeps_valid_terms() {
    let parsed = parse_equation("F = AB'C + B + ABC", VarCount::Three).unwrap();
    assert_eq!(parsed.cells().minterms(), vec![5, 7]);
    assert_eq!(parsed.skipped().len(), 1);
}

#[test]
fn test_parse_then_simplify() {
    let cells = parse("F = A'B'C + A'BC + AB'C + ABC", VarCount::Three).unwrap();
    assert_eq!(simplify(&cells).expression().to_string(), "F = C");
}

#[test]
fn test_error_converts_to_crate_error() {
    let result: Result<_, KmapError> = parse("F = 1", VarCount::Two).map_err(KmapError::from);
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        KmapError::Equation(EquationError::NoTermsResolved { .. })
    ));

    let io_err: std::io::Error = parse("F = 0", VarCount::Three).unwrap_err().into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
}
