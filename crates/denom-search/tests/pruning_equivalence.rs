//! Differential check of the pruning bound against an exhaustive reference.
//!
//! The reference enumerator applies the same canonical-order and yield rules
//! but never prunes on the remaining term budget, so any decomposition the
//! pruned search dropped would show up as a set difference.

use std::collections::BTreeSet;

use denom_core::EncodedPath;
use denom_search::{decompose, SearchParams};
use proptest::prelude::*;

type Leaf = (i64, u8, u64);

fn reference(denoms: &[i64], target: i64, tolerance: i64, max_terms: u8) -> BTreeSet<Leaf> {
    let mut out = BTreeSet::new();
    walk(
        denoms,
        0,
        0,
        target,
        EncodedPath::empty(),
        0,
        max_terms,
        tolerance,
        &mut out,
    );
    out
}

#[allow(clippy::too_many_arguments)]
fn walk(
    denoms: &[i64],
    start: usize,
    sum: i64,
    remaining: i64,
    path: EncodedPath,
    depth: u8,
    budget: u8,
    tolerance: i64,
    out: &mut BTreeSet<Leaf>,
) {
    for index in start..denoms.len() {
        let value = denoms[index];
        let next_sum = sum + value;
        let next_remaining = remaining - value;
        let next_path = path.push(index as u8);
        if (0..=tolerance).contains(&next_remaining) {
            out.insert((next_sum, depth + 1, next_path.as_raw()));
        } else if budget > 1 && next_remaining > 0 {
            walk(
                denoms,
                index,
                next_sum,
                next_remaining,
                next_path,
                depth + 1,
                budget - 1,
                tolerance,
                out,
            );
        }
    }
}

fn pruned(denoms: &[i64], target: i64, tolerance: i64, max_terms: u8) -> Vec<Leaf> {
    let params = SearchParams {
        target,
        tolerance,
        max_terms,
        exact_cutoff: false,
    };
    decompose(&params, denoms)
        .unwrap()
        .map(|result| (result.sum, result.term_count, result.path.as_raw()))
        .collect()
}

fn assert_equivalent(denoms: &[i64], target: i64, tolerance: i64, max_terms: u8) {
    let got = pruned(denoms, target, tolerance, max_terms);
    let got_set: BTreeSet<Leaf> = got.iter().copied().collect();
    // No duplicate leaves: a multiset of values appears exactly once.
    assert_eq!(got.len(), got_set.len());
    assert_eq!(got_set, reference(denoms, target, tolerance, max_terms));
}

#[test]
fn fixed_fixtures_match_reference() {
    assert_equivalent(&[10, 9, 8, 6, 5, 4, 3, 2, 1], 7, 0, 2);
    assert_equivalent(&[10, 9, 8, 6, 5, 4, 3, 2, 1], 21, 2, 4);
    assert_equivalent(&[50, 20, 10, 5, 2, 1], 87, 0, 8);
    assert_equivalent(&[64, 32, 16, 8, 4, 2, 1], 100, 3, 5);
    assert_equivalent(&[7, 3], 29, 1, 6);
}

fn descending_table() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(1i64..=60, 1..8).prop_map(|set| {
        let mut values: Vec<i64> = set.into_iter().collect();
        values.reverse();
        values
    })
}

proptest! {
    #[test]
    fn random_queries_match_reference(
        denoms in descending_table(),
        target in 0i64..=120,
        tolerance in 0i64..=5,
        max_terms in 1u8..=4,
    ) {
        let got_set: BTreeSet<Leaf> = pruned(&denoms, target, tolerance, max_terms)
            .into_iter()
            .collect();
        prop_assert_eq!(got_set, reference(&denoms, target, tolerance, max_terms));
    }
}
