//! Prime-implicant search and greedy cover selection
//!
//! Implements the two passes of the Quine-McCluskey procedure:
//!
//! 1. [`prime_implicants`] grows cubes level by level: each level pairwise
//!    combines the current working set, the deduplicated combinations become
//!    the next working set, and any implicant never consumed by a combination
//!    at its level is prime.
//! 2. [`select_cover`] greedily picks the prime implicant explaining the most
//!    still-uncovered on-set minterms until the on-set is exhausted.
//!
//! The pairwise pass is quadratic in the working-set size per level and the
//! number of generated cubes can blow up exponentially in the worst case.
//! This is the known scalability cliff of exact Quine-McCluskey, not a bug:
//! on-sets in the tens of thousands of minterms can take multi-second to
//! intractable runtimes, and callers needing a size cutoff must apply it
//! upstream.

use std::collections::BTreeSet;

use log::{debug, warn};

use super::implicants::Implicant;
use super::CoverStall;

/// Compute the set of all prime implicants of the given on-set.
///
/// The working set starts with one zero-mask implicant per on-set minterm.
/// The result is sorted by the canonical `(mask, bits)` ordering, which the
/// subsequent greedy selection relies on for tie-breaking.
pub fn prime_implicants(on_set: &[u32]) -> Vec<Implicant> {
    let mut current: Vec<Implicant> = on_set.iter().map(|&m| Implicant::minterm(m)).collect();
    current.sort_unstable();
    current.dedup();

    let mut primes = BTreeSet::new();
    let mut level = 0usize;

    while !current.is_empty() {
        // Deduplicated: the same larger cube is often reachable from several
        // pairs (e.g. 0-1 and 2-3 both yield the same 2-cube).
        let mut next = BTreeSet::new();
        let mut used = vec![false; current.len()];

        for i in 0..current.len() {
            for j in i + 1..current.len() {
                if let Some(combined) = current[i].combine(&current[j]) {
                    next.insert(combined);
                    used[i] = true;
                    used[j] = true;
                }
            }
        }

        for (imp, consumed) in current.iter().zip(&used) {
            if !consumed {
                primes.insert(*imp);
            }
        }

        debug!(
            "level {}: {} implicants, {} combinations",
            level,
            current.len(),
            next.len()
        );

        current = next.into_iter().collect();
        level += 1;
    }

    primes.into_iter().collect()
}

/// Greedily select a cover of the on-set from candidate prime implicants.
///
/// Each round picks the candidate with strictly the largest gain (count of
/// its minterms still uncovered); ties go to the first candidate under the
/// canonical implicant ordering. Returns the selected implicants in
/// selection order, plus a [`CoverStall`] report if no candidate could make
/// progress while minterms remained uncovered.
///
/// A stall cannot occur for a correctly generated prime-implicant set over a
/// well-formed on-set; it indicates an internal defect and is surfaced, not
/// worked around.
pub(crate) fn select_cover(
    primes: &[Implicant],
    on_set: &[u32],
    n_vars: usize,
) -> (Vec<Implicant>, Option<CoverStall>) {
    let on: BTreeSet<u32> = on_set.iter().copied().collect();

    // Precompute each candidate's on-set coverage. A candidate covering
    // nothing can only arise in degenerate cases (primes are built from
    // on-set minterms) but is filtered defensively.
    let candidates: Vec<(Implicant, Vec<u32>)> = primes
        .iter()
        .map(|imp| {
            let covered: Vec<u32> = imp
                .expand(n_vars)
                .into_iter()
                .filter(|m| on.contains(m))
                .collect();
            (*imp, covered)
        })
        .filter(|(_, covered)| !covered.is_empty())
        .collect();

    let mut uncovered = on;
    let mut selected = Vec::new();

    while !uncovered.is_empty() {
        let mut best: Option<usize> = None;
        let mut best_gain = 0usize;

        // Strict > keeps the first candidate in canonical order on ties.
        for (idx, (_, covered)) in candidates.iter().enumerate() {
            let gain = covered.iter().filter(|m| uncovered.contains(m)).count();
            if gain > best_gain {
                best_gain = gain;
                best = Some(idx);
            }
        }

        let Some(idx) = best else {
            warn!(
                "greedy cover stalled, {} minterms uncovered",
                uncovered.len()
            );
            return (
                selected,
                Some(CoverStall {
                    uncovered: uncovered.into_iter().collect(),
                }),
            );
        };

        let (imp, covered) = &candidates[idx];
        selected.push(*imp);
        for m in covered {
            uncovered.remove(m);
        }
    }

    (selected, None)
}
