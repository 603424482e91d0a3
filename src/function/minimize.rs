//! Quine-McCluskey minimization over sub-cube terms
//!
//! The minimizer reduces a sum-of-products function to an irreducible
//! equivalent cover in three phases:
//!
//! 1. **Canonicalize** - expand every term into the minterms consistent
//!    with it over the function's sorted free-variable list.
//! 2. **Combine** - merge cube pairs differing in exactly one cared bit
//!    until a fixed point, collecting the prime implicants.
//! 3. **Select** - take the essential primes, then complete the cover
//!    with an exact minimum-cost search (fewest terms, then fewest summed
//!    literals, then lexicographically earliest terms).
//!
//! Canonicalization is exponential in the variable count. That is
//! acceptable here: the engine targets the handful of variables found in
//! hand-written Boolean algebra exercises.

use super::{Function, Term, Variable};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// A sub-cube of the hypercube, bit-packed over a sorted variable list
///
/// `mask` has a bit set for every variable the cube constrains; `value`
/// holds the required polarity of each cared bit. Variable `i` of the
/// sorted list maps to bit `width - 1 - i`, so a full-mask cube's value
/// equals its truth-table row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cube {
    value: u32,
    mask: u32,
}

impl Cube {
    fn covers(&self, minterm: u32) -> bool {
        minterm & self.mask == self.value
    }

    /// Merge two cubes differing in exactly one cared bit
    fn combine(&self, other: &Cube) -> Option<Cube> {
        if self.mask != other.mask {
            return None;
        }
        let diff = self.value ^ other.value;
        if diff.count_ones() != 1 {
            return None;
        }
        Some(Cube {
            value: self.value & !diff,
            mask: self.mask & !diff,
        })
    }

    fn literal_count(&self) -> u32 {
        self.mask.count_ones()
    }
}

impl Function {
    /// Reduce the function to a minimal equivalent sum-of-products cover
    ///
    /// The result is semantically equivalent and irreducible: no two
    /// terms can be merged by dropping a complementary literal pair, and
    /// no term is subsumed by another. Constant functions come out as the
    /// empty function (false) or the single empty term (true). The output
    /// term order is the natural [`Term`] order, so repeated calls yield
    /// byte-identical renderings.
    ///
    /// Minimization is total: it cannot fail for any constructible
    /// [`Function`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Function;
    ///
    /// # fn main() -> Result<(), quine_logic::Error> {
    /// let f = Function::parse_terms(["AB'", "AB"])?;
    /// assert_eq!(f.minimize().to_string(), "A");
    ///
    /// let tautology = Function::parse_terms(["A", "A'"])?;
    /// assert_eq!(tautology.minimize().to_string(), "1");
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize(&self) -> Function {
        let variables: Vec<Variable> = self.free_variables().into_iter().collect();
        let width = variables.len();

        let minterms = self.canonical_minterms(&variables);
        debug!(
            "minimize: {} terms over {} variables -> {} minterms",
            self.terms().len(),
            width,
            minterms.len()
        );
        if minterms.is_empty() {
            return Function::constant(false);
        }
        if minterms.len() as u64 == 1u64 << width {
            return Function::constant(true);
        }

        let primes = prime_implicants(&minterms, width);
        let cover = select_cover(&primes, &minterms, &variables);

        let mut terms: Vec<Term> = cover
            .iter()
            .map(|cube| cube_to_term(cube, &variables))
            .collect();
        terms.sort();
        Function::from_terms(terms)
    }

    /// Expand every term into the full-variable minterms consistent with it
    fn canonical_minterms(&self, variables: &[Variable]) -> BTreeSet<u32> {
        let width = variables.len();
        let full = ((1u64 << width) - 1) as u32;
        let mut minterms = BTreeSet::new();
        for term in self.terms() {
            let seed = term_to_cube(term, variables);
            // Case-split every variable the term does not mention
            let missing = full & !seed.mask;
            let mut sub = missing;
            loop {
                minterms.insert(seed.value | sub);
                if sub == 0 {
                    break;
                }
                sub = (sub - 1) & missing;
            }
        }
        minterms
    }
}

fn bit_for(index: usize, width: usize) -> u32 {
    1 << (width - 1 - index)
}

fn term_to_cube(term: &Term, variables: &[Variable]) -> Cube {
    let width = variables.len();
    let mut cube = Cube { value: 0, mask: 0 };
    for (i, &var) in variables.iter().enumerate() {
        if let Some(negated) = term.polarity(var) {
            let bit = bit_for(i, width);
            cube.mask |= bit;
            if !negated {
                cube.value |= bit;
            }
        }
    }
    cube
}

fn cube_to_term(cube: &Cube, variables: &[Variable]) -> Term {
    let width = variables.len();
    let mut literals = BTreeMap::new();
    for (i, &var) in variables.iter().enumerate() {
        let bit = bit_for(i, width);
        if cube.mask & bit != 0 {
            literals.insert(var, cube.value & bit == 0);
        }
    }
    Term::from_map(literals)
}

/// Combine minterm cubes to a fixed point, collecting the cubes that can
/// no longer be merged
fn prime_implicants(minterms: &BTreeSet<u32>, width: usize) -> Vec<Cube> {
    let full = ((1u64 << width) - 1) as u32;
    let mut current: BTreeSet<Cube> = minterms
        .iter()
        .map(|&value| Cube { value, mask: full })
        .collect();
    let mut primes: BTreeSet<Cube> = BTreeSet::new();
    let mut pass = 0;

    while !current.is_empty() {
        pass += 1;
        let cubes: Vec<Cube> = current.iter().copied().collect();
        let mut merged = vec![false; cubes.len()];
        let mut next: BTreeSet<Cube> = BTreeSet::new();

        for i in 0..cubes.len() {
            for j in (i + 1)..cubes.len() {
                if let Some(cube) = cubes[i].combine(&cubes[j]) {
                    trace!(
                        "combine {:0w$b}/{:0w$b} + {:0w$b}/{:0w$b}",
                        cubes[i].value,
                        cubes[i].mask,
                        cubes[j].value,
                        cubes[j].mask,
                        w = width
                    );
                    merged[i] = true;
                    merged[j] = true;
                    next.insert(cube);
                }
            }
        }

        for (cube, was_merged) in cubes.iter().zip(&merged) {
            if !was_merged {
                primes.insert(*cube);
            }
        }
        debug!(
            "combine pass {}: {} cubes in, {} merged",
            pass,
            cubes.len(),
            next.len()
        );
        current = next;
    }

    primes.into_iter().collect()
}

/// Select a minimal subset of primes covering every minterm
///
/// Essential primes (sole cover of some minterm) are taken first; the
/// remainder is completed by exact search.
fn select_cover(primes: &[Cube], minterms: &BTreeSet<u32>, variables: &[Variable]) -> Vec<Cube> {
    let mut uncovered = minterms.clone();
    let mut chosen: Vec<Cube> = Vec::new();

    for &minterm in minterms {
        let mut covering = primes.iter().filter(|cube| cube.covers(minterm));
        if let (Some(&first), None) = (covering.next(), covering.next()) {
            if !chosen.contains(&first) {
                debug!("essential prime covers minterm {}", minterm);
                chosen.push(first);
            }
        }
    }
    for cube in &chosen {
        uncovered.retain(|&m| !cube.covers(m));
    }

    if !uncovered.is_empty() {
        debug!(
            "{} minterms left for exact cover search among {} primes",
            uncovered.len(),
            primes.len()
        );
        chosen.extend(exact_cover(primes, &chosen, &uncovered, variables));
    }
    chosen
}

/// Exhaustive minimum-cost completion of a partial cover
///
/// Tries subset sizes in increasing order, so the first size with any
/// covering subset wins (fewest terms). Among covers of that size the
/// cost order is fewest summed literals, then the lexicographically
/// earliest term sequence.
fn exact_cover(
    primes: &[Cube],
    already: &[Cube],
    uncovered: &BTreeSet<u32>,
    variables: &[Variable],
) -> Vec<Cube> {
    let mut candidates: Vec<(Cube, Term)> = primes
        .iter()
        .filter(|&&cube| !already.contains(&cube))
        .filter(|&&cube| uncovered.iter().any(|&m| cube.covers(m)))
        .map(|&cube| (cube, cube_to_term(&cube, variables)))
        .collect();
    candidates.sort_by(|a, b| {
        (a.0.literal_count(), &a.1).cmp(&(b.0.literal_count(), &b.1))
    });

    for size in 1..=candidates.len() {
        let mut best: Option<(u32, Vec<Term>, Vec<Cube>)> = None;
        let mut picked = Vec::with_capacity(size);
        search(&candidates, uncovered, size, 0, &mut picked, &mut best);
        if let Some((_, _, cubes)) = best {
            return cubes;
        }
    }
    Vec::new()
}

fn search(
    candidates: &[(Cube, Term)],
    uncovered: &BTreeSet<u32>,
    size: usize,
    start: usize,
    picked: &mut Vec<usize>,
    best: &mut Option<(u32, Vec<Term>, Vec<Cube>)>,
) {
    if picked.len() == size {
        let covers_all = uncovered
            .iter()
            .all(|&m| picked.iter().any(|&i| candidates[i].0.covers(m)));
        if !covers_all {
            return;
        }
        let cost: u32 = picked.iter().map(|&i| candidates[i].0.literal_count()).sum();
        let terms: Vec<Term> = picked.iter().map(|&i| candidates[i].1.clone()).collect();
        let better = match best {
            None => true,
            Some((best_cost, best_terms, _)) => (cost, &terms) < (*best_cost, best_terms),
        };
        if better {
            let cubes = picked.iter().map(|&i| candidates[i].0).collect();
            *best = Some((cost, terms, cubes));
        }
        return;
    }

    let needed = size - picked.len();
    let mut index = start;
    while index + needed <= candidates.len() {
        picked.push(index);
        search(candidates, uncovered, size, index + 1, picked, best);
        picked.pop();
        index += 1;
    }
}
