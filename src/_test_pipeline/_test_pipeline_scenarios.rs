use crate::_test_util::{rows_as_bits, table_of, token_texts};
use crate::*;
use test_log::test;

#[test]
fn scenario_or() {
    assert!(is_valid("A+B"));
    let table = table_of("A+B");
    assert_eq!(vec!["A", "B"], table.variables().names());
    assert_eq!(vec!["A", "B", "+"], token_texts(table.postfix()));
    assert_eq!(
        vec![vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
        rows_as_bits(table.rows())
    );
}

#[test]
fn scenario_and() {
    let table = table_of("A*B");
    assert_eq!(
        vec![vec![0, 0, 0], vec![0, 1, 0], vec![1, 0, 0], vec![1, 1, 1]],
        rows_as_bits(table.rows())
    );
}

#[test]
fn scenario_xor() {
    let table = table_of("A^B");
    assert_eq!(
        vec![vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
        rows_as_bits(table.rows())
    );
}

#[test]
fn scenario_not() {
    let table = table_of("A'");
    assert_eq!(vec!["A"], table.variables().names());
    assert_eq!(vec![vec![0, 1], vec![1, 0]], rows_as_bits(table.rows()));
}

#[test]
fn scenario_negated_group() {
    assert!(is_valid("(A*B)'+C'"));
    let table = table_of("(A*B)'+C'");
    assert_eq!(vec!["A", "B", "C"], table.variables().names());
    assert_eq!(8, table.num_rows());
    assert_eq!(vec!["0", "0", "0", "1"], table.rows()[0].to_strings());
    assert_eq!(vec!["1", "1", "1", "0"], table.rows()[7].to_strings());
    // Only A=1, B=1, C=1 makes both negations false.
    assert_eq!(7, table.cardinality());
}

#[test]
fn scenario_double_operator() {
    assert!(!is_valid("A++B"));
    assert!(invalid_substrings("A++B").is_empty());
    let error = process(Some("A++B")).unwrap_err();
    assert_eq!(Error::Validation(ValidationFailure::new(Vec::new())), error);
}

#[test]
fn scenario_invalid_character() {
    assert!(!is_valid("A#B"));
    assert_eq!(vec!["#"], invalid_substrings("A#B"));
    let error = process(Some("A#B")).unwrap_err();
    assert_eq!(vec!["#".to_string()], error.invalid_substrings());
}

#[test]
fn scenario_unbalanced_parentheses() {
    assert!(!is_valid("(A+B"));
    assert!(!is_valid("A+B)"));
    assert!(process(Some("(A+B")).is_err());
    assert!(process(Some("A+B)")).is_err());

    let open = tokenize("(A+B").unwrap();
    assert_eq!(Err(ConversionError::UnmatchedOpenParen), to_postfix(&open));
    let close = tokenize("A+B)").unwrap();
    assert_eq!(Err(ConversionError::UnmatchedCloseParen), to_postfix(&close));
}

#[test]
fn scenario_precedence_without_parentheses() {
    // A + B * C is A + (B * C), not (A + B) * C.
    let table = table_of("A + B * C");
    // A=1, B=0, C=0 is true only with the correct precedence.
    let row = &table.rows()[0b100];
    assert_eq!(&[true, false, false], row.values());
    assert_eq!(Valuation::from_index(0b100, 3), row.valuation());
    assert!(row.result());
}

#[test]
fn scenario_case_and_whitespace() {
    let table = table_of("  x1 *\tY1'  ");
    assert_eq!(vec!["X1", "Y1"], table.variables().names());
    assert_eq!(vec!["X1", "Y1", "'", "*"], token_texts(table.postfix()));
    assert_eq!(vec![false, false, true, false], table.result_column());
}

#[test]
fn scenario_repeated_variable() {
    let table = table_of("A ^ A");
    assert_eq!(vec!["A"], table.variables().names());
    assert!(table.is_contradiction());
    let table = table_of("a + A'");
    assert!(table.is_tautology());
}

#[test]
fn scenario_group_without_operator() {
    // Accepted by the validator, but it has no operator between the groups, so every row
    // fails to evaluate and defaults to 0.
    assert!(is_valid("(A)(B)"));
    let table = table_of("(A)(B)");
    assert_eq!(vec!["A", "B"], token_texts(table.postfix()));
    assert_eq!(4, table.num_rows());
    assert!(table.is_contradiction());
}

#[test]
fn scenario_hidden_unbalanced_group() {
    assert!(is_valid("(A))+((B)"));
    assert_eq!(
        Err(Error::Conversion(ConversionError::UnmatchedCloseParen)),
        process(Some("(A))+((B)")).map(|t| t.num_rows())
    );
}

#[test]
fn scenario_results_are_independent() {
    let first = table_of("A*B");
    let second = table_of("C+D+E");
    let again = table_of("A*B");
    assert_eq!(first.rows(), again.rows());
    assert_eq!(8, second.num_rows());
    assert_eq!(vec!["C", "D", "E"], second.variables().names());
}
