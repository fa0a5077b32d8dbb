//! Implicant (cube) representation for Quine-McCluskey minimization
//!
//! An [`Implicant`] packs a cube over the boolean input space into a pair of
//! bit patterns:
//! - `mask` bit i = 1 means input i is a don't-care (unconstrained)
//! - `bits` bit i is the fixed 0/1 value input i must take where `mask` bit i = 0
//!
//! Constructors canonicalize `bits` to zero in don't-care positions, so
//! equality and ordering compare `(mask, bits)` lexicographically. That
//! ordering is deterministic and load-bearing: the greedy cover selection
//! breaks gain ties by it.

/// A cube over the input space: a partial assignment of input variables.
///
/// Supports up to 32 input variables (`u32` patterns); practical use is
/// bounded well below that by the exponential cost of the search itself.
///
/// # Examples
///
/// ```
/// use qm_logic::Implicant;
///
/// let a = Implicant::minterm(1); // x0 = 1, x1 = 0
/// let b = Implicant::minterm(3); // x0 = 1, x1 = 1
///
/// // They differ only in x1, so they merge into the cube x0 = 1, x1 = don't-care
/// let merged = a.combine(&b).unwrap();
/// assert_eq!(merged.bits(), 0b01);
/// assert_eq!(merged.mask(), 0b10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    // Field order matters: derived Ord compares (mask, bits).
    mask: u32,
    bits: u32,
}

impl Implicant {
    /// Create an implicant from raw bit patterns.
    ///
    /// `bits` is masked to zero in don't-care positions so that equality and
    /// ordering are canonical.
    pub fn new(bits: u32, mask: u32) -> Self {
        Implicant {
            mask,
            bits: bits & !mask,
        }
    }

    /// Create the zero-dimensional cube for a single minterm (no don't-cares).
    pub fn minterm(m: u32) -> Self {
        Implicant { mask: 0, bits: m }
    }

    /// Fixed input values (meaningful only where `mask` bit = 0).
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Don't-care positions (bit i = 1 means input i is unconstrained).
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// True if every one of the `n_vars` inputs is a don't-care.
    ///
    /// Such a cube covers the whole input space and renders as constant true.
    pub fn is_universal(&self, n_vars: usize) -> bool {
        let all = low_bits(n_vars);
        self.mask & all == all
    }

    /// Number of literals in this implicant's product term.
    pub fn literal_count(&self, n_vars: usize) -> usize {
        n_vars - (self.mask & low_bits(n_vars)).count_ones() as usize
    }

    /// Attempt to merge two same-size cubes that differ in exactly one
    /// constrained position into a cube one dimension larger.
    ///
    /// Returns `None` when the cubes have different don't-care masks, are
    /// identical, or differ in more than one position.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.mask != other.mask {
            return None;
        }
        let diff = self.bits ^ other.bits;
        if diff == 0 || diff & (diff - 1) != 0 {
            return None;
        }
        // Cannot fire once masks are equal and bits are canonical; kept as a
        // safety invariant check.
        if self.mask & diff != 0 {
            return None;
        }
        Some(Implicant {
            mask: self.mask | diff,
            bits: self.bits & !diff,
        })
    }

    /// True if the cube applies at `minterm`: every constrained input of the
    /// cube matches the corresponding bit of the minterm.
    pub fn contains(&self, minterm: u32) -> bool {
        minterm & !self.mask == self.bits
    }

    /// Enumerate every minterm this cube covers, in deterministic order.
    ///
    /// The k don't-care positions are swept through all 2^k combinations in
    /// increasing counter order, so two runs always produce the same
    /// sequence.
    pub fn expand(&self, n_vars: usize) -> Vec<u32> {
        let dc_pos: Vec<u32> = (0..n_vars as u32)
            .filter(|&i| self.mask >> i & 1 == 1)
            .collect();
        let combos = 1usize << dc_pos.len();

        let mut minterms = Vec::with_capacity(combos);
        for combo in 0..combos {
            let mut val = self.bits;
            for (j, &pos) in dc_pos.iter().enumerate() {
                if combo >> j & 1 == 1 {
                    val |= 1 << pos;
                } else {
                    val &= !(1 << pos);
                }
            }
            minterms.push(val);
        }
        minterms
    }
}

/// Bit pattern with the low `n_vars` bits set.
fn low_bits(n_vars: usize) -> u32 {
    if n_vars >= 32 {
        u32::MAX
    } else {
        (1u32 << n_vars) - 1
    }
}
