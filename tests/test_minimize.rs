//! Property tests for the minimizer
//!
//! The equivalence checker is the ground truth here: whatever shape the
//! minimizer emits, it must compute the same function, be stable under
//! re-minimization, and contain no combinable or subsumed term pair.

use quine_logic::{Function, Term};

/// A spread of functions exercising the interesting minimizer paths:
/// merges, absorption, consensus, constants, and covers with no
/// essential primes.
fn corpus() -> Vec<Function> {
    let cases: &[&[&str]] = &[
        &[],
        &[""],
        &["A"],
        &["A'"],
        &["A", "A'"],
        &["A", "A"],
        &["AB'", "AB"],
        &["AB'", "A'B"],
        &["A", "AB"],
        &["AB", "A'C", "BC"],
        &["AB", "AC", "BC"],
        &["A'B'", "A'B", "AB"],
        &["A'B'", "A'C'", "B'C", "BC'", "AC", "AB"],
        &["AB'C", "A'BC", "ABC'", "ABC", "AB'C'"],
        &["A'B'C'", "A'B'C", "A'BC", "ABC"],
        &["AB", "CD"],
        &["A'B'C'D'", "AB", "A'BCD"],
        &["ABC", "ABD", "ACD", "BCD"],
        &["A", "B", "C", "D"],
    ];
    cases
        .iter()
        .map(|terms| Function::parse_terms(*terms).unwrap())
        .collect()
}

/// Two terms are combinable when they constrain the same variables and
/// disagree on exactly one polarity
fn combinable(a: &Term, b: &Term) -> bool {
    let vars_a: Vec<_> = a.variables().collect();
    let vars_b: Vec<_> = b.variables().collect();
    if vars_a != vars_b {
        return false;
    }
    let disagreements = vars_a
        .iter()
        .filter(|&&v| a.polarity(v) != b.polarity(v))
        .count();
    disagreements == 1
}

/// `a` subsumes `b` when every literal of `a` appears in `b`
fn subsumes(a: &Term, b: &Term) -> bool {
    a.literals().all(|lit| b.polarity(lit.var) == Some(lit.negated))
}

#[test]
fn test_roundtrip_semantics() {
    for f in corpus() {
        let minimized = f.minimize();
        assert!(
            f.equivalent_to(&minimized),
            "minimize({}) = {} is not equivalent",
            f,
            minimized
        );
    }
}

#[test]
fn test_idempotence() {
    for f in corpus() {
        let once = f.minimize();
        let twice = once.minimize();
        assert_eq!(once, twice, "minimize is not idempotent for {}", f);
    }
}

#[test]
fn test_irreducibility_no_combinable_pairs() {
    for f in corpus() {
        let minimized = f.minimize();
        let terms = minimized.terms();
        for i in 0..terms.len() {
            for j in (i + 1)..terms.len() {
                assert!(
                    !combinable(&terms[i], &terms[j]),
                    "{} and {} in minimize({}) = {} are combinable",
                    terms[i],
                    terms[j],
                    f,
                    minimized
                );
            }
        }
    }
}

#[test]
fn test_irreducibility_no_subsumed_terms() {
    for f in corpus() {
        let minimized = f.minimize();
        let terms = minimized.terms();
        for i in 0..terms.len() {
            for j in 0..terms.len() {
                if i == j {
                    continue;
                }
                assert!(
                    !subsumes(&terms[i], &terms[j]),
                    "{} subsumes {} in minimize({}) = {}",
                    terms[i],
                    terms[j],
                    f,
                    minimized
                );
            }
        }
    }
}

#[test]
fn test_determinism() {
    for f in corpus() {
        assert_eq!(f.minimize().to_string(), f.minimize().to_string());
    }
}

#[test]
fn test_no_duplicate_terms_in_result() {
    for f in corpus() {
        let minimized = f.minimize();
        let terms = minimized.terms();
        for i in 0..terms.len() {
            for j in (i + 1)..terms.len() {
                assert_ne!(terms[i], terms[j], "duplicate term in {}", minimized);
            }
        }
    }
}

#[test]
fn test_minimized_never_larger() {
    for f in corpus() {
        let minimized = f.minimize();
        // Canonical expansion can only shrink back to at most the
        // original term count after combining and selection
        assert!(
            minimized.terms().len() <= f.terms().len().max(1),
            "minimize({}) grew to {}",
            f,
            minimized
        );
    }
}
