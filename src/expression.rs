//! Product-term and sum-of-products rendering for minimized covers
//!
//! A selected implicant becomes a [`Term`] (conjunction of literals) and a
//! full cover becomes a [`Sop`] (disjunction of terms, or a constant).
//! Variables render as `x0`, `x1`, ... where `x0` is bit 0 of the minterm
//! index; negated literals carry a `~` prefix.

use std::fmt;

use crate::cover::{Cover, Implicant};

/// One product term: the conjunction of one literal per constrained input.
///
/// Don't-care positions contribute no literal. A term with no literals (all
/// positions don't-care) is the constant-true term.
///
/// # Examples
///
/// ```
/// use qm_logic::{Implicant, Term};
///
/// // x0 fixed to 1, x1 fixed to 0, x2 don't-care
/// let imp = Implicant::new(0b001, 0b100);
/// let term = Term::from_implicant(&imp, 3);
/// assert_eq!(term.to_string(), "x0 & ~x1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    literals: Vec<(usize, bool)>,
}

impl Term {
    /// Build the product term of an implicant: variable i appears un-negated
    /// if its fixed value is 1, negated if 0, not at all if don't-care.
    pub fn from_implicant(imp: &Implicant, n_vars: usize) -> Self {
        let mut literals = Vec::new();
        for i in 0..n_vars {
            let bit = 1u32 << i;
            if imp.mask() & bit != 0 {
                continue;
            }
            literals.push((i, imp.bits() & bit != 0));
        }
        Term { literals }
    }

    /// Literals as `(variable index, polarity)` pairs, in increasing
    /// variable order.
    pub fn literals(&self) -> &[(usize, bool)] {
        &self.literals
    }

    /// True if the term has no literals and renders as constant true.
    pub fn is_constant_true(&self) -> bool {
        self.literals.is_empty()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "1");
        }
        for (k, &(var, polarity)) in self.literals.iter().enumerate() {
            if k > 0 {
                write!(f, " & ")?;
            }
            if !polarity {
                write!(f, "~")?;
            }
            write!(f, "x{}", var)?;
        }
        Ok(())
    }
}

/// A full output function as a sum of products.
///
/// An empty cover renders as constant false; a cover reduced to the single
/// all-don't-care implicant renders as constant true.
///
/// # Examples
///
/// ```
/// use qm_logic::{Cover, Sop};
///
/// let (cover, _) = Cover::minimize(&[1, 2, 3], 2);
/// let sop = Sop::from_cover(&cover);
/// assert_eq!(sop.to_string(), "(x1) | (x0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sop {
    /// Constant function: `true` for the full on-set, `false` for the empty one.
    Constant(bool),
    /// Disjunction of product terms, in cover order.
    Terms(Vec<Term>),
}

impl Sop {
    /// Render a cover as a sum-of-products expression.
    pub fn from_cover(cover: &Cover) -> Self {
        if cover.is_empty() {
            return Sop::Constant(false);
        }
        if cover.is_constant_true() {
            return Sop::Constant(true);
        }
        Sop::Terms(
            cover
                .implicants()
                .iter()
                .map(|imp| Term::from_implicant(imp, cover.n_vars()))
                .collect(),
        )
    }
}

impl From<&Cover> for Sop {
    fn from(cover: &Cover) -> Self {
        Sop::from_cover(cover)
    }
}

impl fmt::Display for Sop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sop::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            Sop::Terms(terms) => {
                if terms.len() == 1 {
                    return write!(f, "{}", terms[0]);
                }
                for (k, term) in terms.iter().enumerate() {
                    if k > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "({})", term)?;
                }
                Ok(())
            }
        }
    }
}
