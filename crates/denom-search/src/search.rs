//! The pruned depth-bounded enumerator.
//!
//! The recursion is flattened into an explicit frame stack so the search can
//! be exposed as a plain [`Iterator`]: each `next` call performs exactly the
//! work needed to reach the next leaf, and dropping the iterator abandons all
//! remaining branches.

use denom_core::errors::DenomError;
use denom_core::EncodedPath;

use crate::query::{validate_descending, SearchParams};

/// One admissible decomposition, produced at a leaf of the search.
///
/// Results are immutable; `path` packs the chosen indices into a `u64` and is
/// decodable back to literal values via [`DecompositionResult::values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecompositionResult {
    /// Sum of the chosen denominations, within `tolerance` below the target.
    pub sum: i64,
    /// Number of terms in the decomposition.
    pub term_count: u8,
    /// Packed index sequence, oldest pick in the highest populated byte.
    pub path: EncodedPath,
}

impl DecompositionResult {
    /// Decodes the path against the denomination sequence the search ran on,
    /// returning the literal values in pick order (non-increasing).
    pub fn values(&self, denoms: &[i64]) -> Vec<i64> {
        self.path
            .decode(self.term_count as usize)
            .into_iter()
            .map(|index| denoms[index as usize])
            .collect()
    }
}

/// Enumerates all canonical decompositions of `params.target` over `denoms`.
///
/// `denoms` is the active sequence: strictly descending, unique, positive,
/// at most 256 entries (typically produced by
/// [`denom_core::DenominationTable::active`]). Validation is eager; the
/// returned iterator never fails. Zero results is a legitimate outcome, not
/// an error.
pub fn decompose<'a>(
    params: &SearchParams,
    denoms: &'a [i64],
) -> Result<Decompositions<'a>, DenomError> {
    params.validate()?;
    validate_descending(denoms)?;
    Ok(Decompositions {
        denoms,
        target: params.target,
        tolerance: params.tolerance,
        exact_cutoff: params.exact_cutoff,
        max_terms: params.max_terms,
        stack: Vec::with_capacity(params.max_terms as usize),
        next_root: 0,
    })
}

/// An in-progress sibling group: the node at `depth` terms has been entered
/// and its candidate children start at `cursor`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Next candidate index to try as a child.
    cursor: usize,
    /// Picks still allowed below this node.
    budget: u8,
    /// Amount still to cover after this node's pick.
    remaining: i64,
    /// Running sum including this node's pick.
    sum: i64,
    /// Path including this node's pick.
    path: EncodedPath,
    /// Terms picked so far, including this node.
    depth: u8,
    /// Exact-cutoff flag: no further children may start.
    halted: bool,
}

/// Lazy, pull-driven sequence of [`DecompositionResult`]s.
///
/// Depth-first: each branch is drained fully before its next sibling starts,
/// siblings run in ascending index order, and the top level tries every index
/// of the sequence as a first term. Repeated calls with identical inputs
/// yield identical, identically ordered sequences.
#[derive(Debug)]
pub struct Decompositions<'a> {
    denoms: &'a [i64],
    target: i64,
    tolerance: i64,
    exact_cutoff: bool,
    max_terms: u8,
    stack: Vec<Frame>,
    next_root: usize,
}

impl<'a> Decompositions<'a> {
    /// Smallest position `>= start` whose value does not overshoot
    /// `remaining`, or `denoms.len()` when none exists. The sequence is
    /// descending, so this is a reversed-comparator binary search.
    fn first_at_most(&self, start: usize, remaining: i64) -> usize {
        if remaining <= 0 {
            return self.denoms.len();
        }
        start + self.denoms[start..].partition_point(|&value| value > remaining)
    }

    /// Even `budget` repetitions of the candidate value cannot close the gap
    /// to within tolerance. Values only shrink at later positions, so the
    /// first failure ends the whole sibling group.
    fn below_bound(&self, budget: u8, candidate: i64, remaining: i64) -> bool {
        i64::from(budget) * candidate < remaining - self.tolerance
    }

    /// Picks `index` under the given parent state. Returns a result when the
    /// pick lands within tolerance, otherwise pushes a frame for its children
    /// (or nothing, when the branch is dead).
    fn enter(
        &mut self,
        index: usize,
        parent_sum: i64,
        parent_remaining: i64,
        parent_path: EncodedPath,
        parent_depth: u8,
        parent_budget: u8,
    ) -> Option<DecompositionResult> {
        let value = self.denoms[index];
        let sum = parent_sum + value;
        let remaining = parent_remaining - value;
        let path = parent_path.push(index as u8);
        let depth = parent_depth + 1;
        let budget = parent_budget - 1;

        if (0..=self.tolerance).contains(&remaining) {
            if self.exact_cutoff && remaining == 0 {
                for frame in &mut self.stack {
                    frame.halted = true;
                }
            }
            return Some(DecompositionResult {
                sum,
                term_count: depth,
                path,
            });
        }
        if budget == 0 || remaining < 0 {
            return None;
        }
        let cursor = self.first_at_most(index, remaining);
        self.stack.push(Frame {
            cursor,
            budget,
            remaining,
            sum,
            path,
            depth,
            halted: false,
        });
        None
    }
}

impl<'a> Iterator for Decompositions<'a> {
    type Item = DecompositionResult;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&frame) = self.stack.last() {
                if frame.halted
                    || frame.cursor >= self.denoms.len()
                    || self.below_bound(frame.budget, self.denoms[frame.cursor], frame.remaining)
                {
                    self.stack.pop();
                    continue;
                }
                if let Some(top) = self.stack.last_mut() {
                    top.cursor += 1;
                }
                if let Some(result) = self.enter(
                    frame.cursor,
                    frame.sum,
                    frame.remaining,
                    frame.path,
                    frame.depth,
                    frame.budget,
                ) {
                    return Some(result);
                }
            } else if self.next_root < self.denoms.len() {
                let root = self.next_root;
                self.next_root += 1;
                let result =
                    self.enter(root, 0, self.target, EncodedPath::empty(), 0, self.max_terms);
                if result.is_some() {
                    return result;
                }
            } else {
                return None;
            }
        }
    }
}
