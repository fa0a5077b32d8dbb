//! Cover types for sum-of-products minimization
//!
//! A [`Cover`] is the minimizer's artifact for one output function: an
//! ordered sequence of implicants whose covered on-set minterms together
//! equal the function's on-set. Covers are produced by
//! [`Cover::minimize`], which runs the Quine-McCluskey prime-implicant
//! search followed by greedy set-cover selection.

mod implicants;
mod minimize;

pub use implicants::Implicant;
pub use minimize::prime_implicants;

use std::fmt;

/// Report of a stalled greedy cover selection.
///
/// A stall means selection could not make progress while on-set minterms
/// remained uncovered. It indicates a defect in prime-implicant generation
/// rather than a normal runtime condition: the partial cover computed so far
/// is still returned, and sibling outputs are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverStall {
    /// On-set minterms no remaining candidate could explain, in increasing order.
    pub uncovered: Vec<u32>,
}

impl fmt::Display for CoverStall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cover selection stalled with {} minterms uncovered",
            self.uncovered.len()
        )
    }
}

/// A minimized sum-of-products cover for one output function.
///
/// # Examples
///
/// ```
/// use qm_logic::Cover;
///
/// // On-set {1, 3} over two variables minimizes to the single cube x0
/// let (cover, stall) = Cover::minimize(&[1, 3], 2);
/// assert!(stall.is_none());
/// assert_eq!(cover.len(), 1);
/// assert_eq!(cover.implicants()[0].bits(), 0b01);
/// assert_eq!(cover.implicants()[0].mask(), 0b10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    n_vars: usize,
    implicants: Vec<Implicant>,
}

impl Cover {
    /// Minimize the on-set of one output function.
    ///
    /// This is a pure function of `(on_set, n_vars)`: it owns no external
    /// state and two runs on the same input yield bit-for-bit identical
    /// covers. An empty on-set produces an empty cover (constant false).
    ///
    /// The second tuple element reports a [`CoverStall`] if greedy selection
    /// could not cover the full on-set; the cover then holds the partial
    /// selection made before the stall.
    pub fn minimize(on_set: &[u32], n_vars: usize) -> (Cover, Option<CoverStall>) {
        if on_set.is_empty() {
            return (
                Cover {
                    n_vars,
                    implicants: Vec::new(),
                },
                None,
            );
        }

        let primes = prime_implicants(on_set);
        let (implicants, stall) = minimize::select_cover(&primes, on_set, n_vars);
        (Cover { n_vars, implicants }, stall)
    }

    /// Number of input variables of the function this cover belongs to.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Selected implicants in selection order.
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Number of implicants in the cover.
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// True if the cover holds no implicants (constant-false function).
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// True if the cover is the single all-don't-care implicant
    /// (constant-true function).
    pub fn is_constant_true(&self) -> bool {
        self.implicants.len() == 1 && self.implicants[0].is_universal(self.n_vars)
    }

    /// Union of the minterms covered by all implicants, sorted and
    /// duplicate-free.
    pub fn covered_minterms(&self) -> Vec<u32> {
        let mut minterms: Vec<u32> = self
            .implicants
            .iter()
            .flat_map(|imp| imp.expand(self.n_vars))
            .collect();
        minterms.sort_unstable();
        minterms.dedup();
        minterms
    }
}
