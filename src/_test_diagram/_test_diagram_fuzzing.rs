//!
//! Here, we generate random lists of minterms, i.e. partial valuations where every variable
//! is either fixed to a random value or left as a wildcard. Each list is compiled into
//! a `Diagram` (with and without node sharing) and the result is exhaustively compared to the
//! closed-world reading of the list. To get predictable test cases, we use a predefined set
//! of randomness seeds.
//!
//! Exhaustive checking is exponential in the number of variables, so we only go up to
//! 10 variables here.

use crate::_test_util::assert_matches_minterms;
use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

/// Generate `count` random minterms over `num_vars` variables. Every variable is left as
/// a wildcard with probability `1 / (fixed_ratio + 1)`.
fn random_minterms(
    num_vars: u16,
    count: usize,
    fixed_ratio: u32,
    seed: u64,
) -> Vec<PartialValuation> {
    let mut rand = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut minterm = PartialValuation::empty();
            for var in 0..num_vars {
                if rand.next_u32() % (fixed_ratio + 1) != 0 {
                    minterm.set_value(Variable(var), rand.next_u32() % 2 == 0);
                }
            }
            minterm
        })
        .collect()
}

fn mk_names(num_vars: u16) -> Vec<String> {
    (0..num_vars).map(|i| format!("x_{}", i)).collect()
}

fn fuzz_test(num_vars: u16, count: usize, fixed_ratio: u32, seed: u64) {
    let minterms = random_minterms(num_vars, count, fixed_ratio, seed);
    let mut builder = DiagramBuilder::new(&mk_names(num_vars)).unwrap();
    for minterm in &minterms {
        builder.add_minterm(minterm.clone());
    }

    let shared = builder.build();
    let separate = builder.clone().with_node_sharing(false).build();

    assert_eq!(Ok(()), shared.validate());
    assert_eq!(Ok(()), separate.validate());
    assert_matches_minterms(&shared, &minterms);
    assert_matches_minterms(&separate, &minterms);
    assert!(shared.size() <= separate.size());
    assert_eq!(shared.cardinality(), separate.cardinality());

    // Named evaluation agrees with the index-based one.
    let names = mk_names(num_vars);
    for valuation in ValuationsOfClauseIterator::new_unconstrained(num_vars) {
        let assignment: Vec<(&str, bool)> = names
            .iter()
            .map(|name| name.as_str())
            .zip(valuation.clone().vector())
            .collect();
        assert_eq!(Ok(shared.eval_in(&valuation)), shared.evaluate(&assignment));
        assert_eq!(Ok(separate.eval_in(&valuation)), separate.evaluate(&assignment));
    }
}

#[test]
fn fuzz_test_small_dense() {
    for seed in 0..50 {
        fuzz_test(4, 3, 3, seed);
    }
}

#[test]
fn fuzz_test_small_sparse() {
    for seed in 0..50 {
        fuzz_test(4, 5, 1, seed);
    }
}

#[test]
fn fuzz_test_medium() {
    for seed in 0..20 {
        fuzz_test(7, 10, 2, seed);
    }
}

#[test]
fn fuzz_test_large() {
    for seed in 0..5 {
        fuzz_test(10, 25, 3, seed);
    }
}

#[test]
fn fuzz_test_many_minterms() {
    for seed in 0..3 {
        fuzz_test(8, 200, 4, seed);
    }
}
