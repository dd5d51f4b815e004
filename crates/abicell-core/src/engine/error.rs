use crate::core::models::atom::Atom;
use crate::core::models::coordinate::CoordinateSystem;
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CellError {
    #[error("Malformed coordinate value {literal} in {context}")]
    MalformedCoordinateValue { literal: String, context: String },

    #[error("Incompatible coordinate systems: '{left}' and '{right}'")]
    IncompatibleCoordinateSystem {
        left: CoordinateSystem,
        right: CoordinateSystem,
    },

    #[error("Dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Invalid chirality {chirality:?}: {reason}")]
    InvalidChirality {
        chirality: Vec<i64>,
        reason: &'static str,
    },

    #[error("Degenerate repeat factor {factors:?}: the repeated cell would be empty")]
    DegenerateRepeatFactor { factors: [u32; 3] },

    /// Carries the list with every substitution before the failing dopant already applied.
    #[error(
        "Cannot find an atom with the same coordinates as {dopant}; doping pattern must match the underlying cell"
    )]
    NoMatchingAtom {
        dopant: Box<Atom>,
        partially_doped: Vec<Atom>,
    },

    #[error("Lattice basis is singular")]
    SingularBasis,
}

/// A non-fatal finding about a transform's result.
///
/// The transform completes and returns its atoms; the caller decides how to surface these.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformWarning {
    /// Pairs of atom indices closer than the collision threshold.
    Collisions { pairs: Vec<(usize, usize)> },
    /// The chiral cell holds a different number of atoms than its area implies.
    AtomCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformWarning::Collisions { pairs } => write!(
                f,
                "{} colliding atom pair(s): {}",
                pairs.len(),
                pairs.iter().map(|(i, j)| format!("({i}, {j})")).join(", ")
            ),
            TransformWarning::AtomCountMismatch { expected, actual } => write!(
                f,
                "expected {} atoms in the new cell but found {}",
                expected, actual
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coordinate::Coordinate;

    #[test]
    fn no_matching_atom_message_names_the_dopant() {
        let err = CellError::NoMatchingAtom {
            dopant: Box::new(Atom::new(5, Coordinate::reduced([0, 0, 0]))),
            partially_doped: Vec::new(),
        };
        assert!(err.to_string().contains("B (znucl 5) at [0, 0, 0] (reduced)"));
    }

    #[test]
    fn warnings_render_readably() {
        let collisions = TransformWarning::Collisions {
            pairs: vec![(0, 1), (2, 5)],
        };
        assert_eq!(collisions.to_string(), "2 colliding atom pair(s): (0, 1), (2, 5)");

        let mismatch = TransformWarning::AtomCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            mismatch.to_string(),
            "expected 4 atoms in the new cell but found 3"
        );
    }
}
