//! Tests for the function module

use super::*;
use std::collections::BTreeMap;
use test_log::test;

fn var(ch: char) -> Variable {
    Variable::new(ch).unwrap()
}

fn func(terms: &[&str]) -> Function {
    Function::parse_terms(terms).unwrap()
}

// ========== Term parsing ==========

#[test]
fn test_parse_simple_term() {
    let term = Term::parse("AB'C").unwrap();
    assert_eq!(term.len(), 3);
    assert_eq!(term.polarity(var('A')), Some(false));
    assert_eq!(term.polarity(var('B')), Some(true));
    assert_eq!(term.polarity(var('C')), Some(false));
    assert_eq!(term.polarity(var('D')), None);
}

#[test]
fn test_parse_empty_term_is_truth() {
    let term = Term::parse("").unwrap();
    assert!(term.is_empty());
    assert_eq!(term.to_string(), "1");
}

#[test]
fn test_parse_repeated_variable_collapses() {
    assert_eq!(Term::parse("AA").unwrap(), Term::parse("A").unwrap());
    assert_eq!(Term::parse("A'A'B").unwrap(), Term::parse("A'B").unwrap());
}

#[test]
fn test_parse_conflicting_polarity_rejected() {
    let err = Term::parse("AA'").unwrap_err();
    assert_eq!(
        err,
        TermParseError::ConflictingPolarity {
            term: "AA'".to_string(),
            variable: var('A'),
        }
    );
    assert!(Term::parse("A'A").is_err());
    assert!(Term::parse("AB'A'").is_err());
}

#[test]
fn test_parse_lowercase_rejected() {
    let err = Term::parse("ABc").unwrap_err();
    assert_eq!(
        err,
        TermParseError::InvalidTermSyntax {
            term: "ABc".to_string(),
            position: 2,
        }
    );
}

#[test]
fn test_parse_dangling_negation_rejected() {
    assert_eq!(
        Term::parse("'A").unwrap_err(),
        TermParseError::InvalidTermSyntax {
            term: "'A".to_string(),
            position: 0,
        }
    );
    assert_eq!(
        Term::parse("A''").unwrap_err(),
        TermParseError::InvalidTermSyntax {
            term: "A''".to_string(),
            position: 2,
        }
    );
}

#[test]
fn test_parse_bad_character_rejected() {
    assert!(Term::parse("A+B").is_err());
    assert!(Term::parse("A B").is_err());
    assert!(Term::parse("A1").is_err());
}

#[test]
fn test_from_literals() {
    let term = Term::from_literals([
        Literal {
            var: var('B'),
            negated: true,
        },
        Literal {
            var: var('A'),
            negated: false,
        },
    ])
    .unwrap();
    assert_eq!(term.to_string(), "AB'");

    let conflict = Term::from_literals([
        Literal {
            var: var('A'),
            negated: false,
        },
        Literal {
            var: var('A'),
            negated: true,
        },
    ]);
    assert!(conflict.is_err());
}

#[test]
fn test_parse_terms_first_error_wins() {
    let err = Function::parse_terms(["AB", "xy", "cd"]).unwrap_err();
    assert_eq!(
        err,
        TermParseError::InvalidTermSyntax {
            term: "xy".to_string(),
            position: 0,
        }
    );
}

// ========== Display ==========

#[test]
fn test_term_display_sorts_variables() {
    assert_eq!(Term::parse("BA").unwrap().to_string(), "AB");
    assert_eq!(Term::parse("C'A").unwrap().to_string(), "AC'");
}

#[test]
fn test_function_display() {
    assert_eq!(func(&["AB", "C'D"]).to_string(), "AB + C'D");
    assert_eq!(Function::constant(false).to_string(), "0");
    assert_eq!(Function::constant(true).to_string(), "1");
}

// ========== Function model ==========

#[test]
fn test_free_variables() {
    let f = func(&["AB'", "C"]);
    let vars: Vec<char> = f.free_variables().iter().map(|v| v.as_char()).collect();
    assert_eq!(vars, vec!['A', 'B', 'C']);
    assert!(Function::constant(true).free_variables().is_empty());
}

#[test]
fn test_evaluate() {
    let f = func(&["AB'", "C"]);
    let mut assignment = BTreeMap::new();
    assignment.insert(var('A'), true);
    assignment.insert(var('B'), false);
    assignment.insert(var('C'), false);
    assert!(f.evaluate(&assignment).unwrap());

    assignment.insert(var('B'), true);
    assert!(!f.evaluate(&assignment).unwrap());

    assignment.insert(var('C'), true);
    assert!(f.evaluate(&assignment).unwrap());
}

#[test]
fn test_evaluate_unbound_variable() {
    let f = func(&["AB"]);
    let mut assignment = BTreeMap::new();
    assignment.insert(var('A'), true);
    let err = f.evaluate(&assignment).unwrap_err();
    assert_eq!(err.variable, var('B'));
}

#[test]
fn test_evaluate_constants() {
    let empty = BTreeMap::new();
    assert!(Function::constant(true).evaluate(&empty).unwrap());
    assert!(!Function::constant(false).evaluate(&empty).unwrap());
}

// ========== Equivalence ==========

#[test]
fn test_equivalent_same_definition() {
    assert!(func(&["A"]).equivalent_to(&func(&["A"])));
}

#[test]
fn test_equivalent_different_shape() {
    assert!(func(&["AB'", "AB"]).equivalent_to(&func(&["A"])));
    assert!(func(&["A", "B"]).equivalent_to(&func(&["B", "A", "AB"])));
}

#[test]
fn test_not_equivalent() {
    assert!(!func(&["AB"]).equivalent_to(&func(&["A"])));
    assert!(!func(&["A"]).equivalent_to(&func(&["B"])));
}

#[test]
fn test_equivalent_constants() {
    assert!(Function::constant(false).equivalent_to(&Function::default()));
    assert!(func(&["A", "A'"]).equivalent_to(&Function::constant(true)));
    assert!(!Function::constant(true).equivalent_to(&Function::constant(false)));
}

// ========== Minimization ==========

#[test]
fn test_minimize_complementary_pair() {
    assert_eq!(func(&["AB'", "AB"]).minimize().to_string(), "A");
}

#[test]
fn test_minimize_absorption() {
    assert_eq!(func(&["A", "AB"]).minimize().to_string(), "A");
    assert_eq!(func(&["AB", "ABC", "A"]).minimize().to_string(), "A");
}

#[test]
fn test_minimize_duplicate_terms() {
    assert_eq!(func(&["A", "A"]).minimize().to_string(), "A");
}

#[test]
fn test_minimize_xor_is_already_minimal() {
    assert_eq!(func(&["AB'", "A'B"]).minimize().to_string(), "AB' + A'B");
}

#[test]
fn test_minimize_tautology() {
    assert_eq!(func(&["A", "A'"]).minimize().to_string(), "1");
    assert_eq!(func(&[""]).minimize().to_string(), "1");
    assert_eq!(func(&["AB", ""]).minimize().to_string(), "1");
}

#[test]
fn test_minimize_empty_function() {
    assert_eq!(Function::default().minimize().to_string(), "0");
}

#[test]
fn test_minimize_merges_into_smaller_cover() {
    // A'B' + A'B + AB reduces to A' + B
    assert_eq!(
        func(&["A'B'", "A'B", "AB"]).minimize().to_string(),
        "A' + B"
    );
}

#[test]
fn test_minimize_drops_consensus_term() {
    // BC is the consensus of AB and A'C
    assert_eq!(
        func(&["AB", "A'C", "BC"]).minimize().to_string(),
        "AB + A'C"
    );
}

#[test]
fn test_minimize_majority_untouched() {
    assert_eq!(
        func(&["AB", "AC", "BC"]).minimize().to_string(),
        "AB + AC + BC"
    );
}

#[test]
fn test_minimize_cyclic_cover() {
    // Every minterm is covered by exactly two primes, so the cover
    // has no essential primes and the exact search must break the tie
    let f = func(&["A'B'", "A'C'", "B'C", "BC'", "AC", "AB"]);
    let minimized = f.minimize();
    assert_eq!(minimized.terms().len(), 3);
    assert!(f.equivalent_to(&minimized));
    assert_eq!(minimized.to_string(), "AB + A'C' + B'C");
}

#[test]
fn test_minimize_preserves_semantics() {
    let cases: &[&[&str]] = &[
        &["AB'", "AB"],
        &["AB'C", "A'BC", "ABC'", "ABC"],
        &["A", "BC", "A'B'C'"],
        &["AB", "CD"],
        &["A'B'C'D'", "AB", "A'BCD"],
    ];
    for terms in cases {
        let f = func(terms);
        let minimized = f.minimize();
        assert!(
            f.equivalent_to(&minimized),
            "minimize changed the semantics of {}",
            f
        );
    }
}

#[test]
fn test_minimize_idempotent() {
    let f = func(&["AB'C", "A'BC", "ABC'", "ABC", "AB'C'"]);
    let once = f.minimize();
    let twice = once.minimize();
    assert_eq!(once, twice);
}

#[test]
fn test_minimize_deterministic() {
    let f = func(&["AB", "A'C", "BC", "AC'"]);
    assert_eq!(f.minimize().to_string(), f.minimize().to_string());
}

// ========== Truth tables ==========

#[test]
fn test_truth_table_negated_variable() {
    let table = func(&["A'"]).truth_table();
    let rows: Vec<Row> = table.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].values(), &[false]);
    assert!(rows[0].output());
    assert_eq!(rows[1].values(), &[true]);
    assert!(!rows[1].output());
}

#[test]
fn test_truth_table_counting_order() {
    let table = func(&["AB"]).truth_table();
    let values: Vec<Vec<bool>> = table.rows().map(|row| row.values().to_vec()).collect();
    assert_eq!(
        values,
        vec![
            vec![false, false],
            vec![false, true],
            vec![true, false],
            vec![true, true],
        ]
    );
    let outputs: Vec<bool> = table.rows().map(|row| row.output()).collect();
    assert_eq!(outputs, vec![false, false, false, true]);
}

#[test]
fn test_truth_table_display() {
    let table = func(&["AB"]).truth_table();
    assert_eq!(
        table.to_string(),
        "A | B | Out\n0 | 0 | 0\n0 | 1 | 0\n1 | 0 | 0\n1 | 1 | 1"
    );
}

#[test]
fn test_truth_table_constant_function() {
    let table = Function::constant(true).truth_table();
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.to_string(), "Out\n1");
}

#[test]
fn test_truth_table_restartable() {
    let table = func(&["AB'", "C"]).truth_table();
    let first: Vec<Row> = table.rows().collect();
    let second: Vec<Row> = table.rows().collect();
    assert_eq!(first, second);
}
