use crate::core::models::atom::Atom;
use crate::engine::error::CellError;
use itertools::Itertools;

/// Two atoms sitting closer than the collision threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Index of the first atom; always less than `second`.
    pub first: usize,
    pub second: usize,
    pub distance: f64,
}

impl Collision {
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

/// Lazily yields every pair `(i, j)`, `i < j`, whose coordinates lie closer than `threshold`.
///
/// Pairs come out in lexicographic order. The scan is O(n²) and stops wherever the caller
/// stops pulling from the iterator.
///
/// # Errors
///
/// All atoms must share one coordinate system and dimension; this is checked before the
/// iterator is returned ([`CellError::IncompatibleCoordinateSystem`] or
/// [`CellError::DimensionMismatch`]).
pub fn get_collisions(
    atoms: &[Atom],
    threshold: f64,
) -> Result<impl Iterator<Item = Collision> + '_, CellError> {
    if let Some((head, rest)) = atoms.split_first() {
        for atom in rest {
            if atom.coord.system() != head.coord.system() {
                return Err(CellError::IncompatibleCoordinateSystem {
                    left: head.coord.system().clone(),
                    right: atom.coord.system().clone(),
                });
            }
            if atom.coord.dimension() != head.coord.dimension() {
                return Err(CellError::DimensionMismatch {
                    expected: head.coord.dimension(),
                    found: atom.coord.dimension(),
                });
            }
        }
    }

    Ok((0..atoms.len())
        .tuple_combinations()
        .filter_map(move |(first, second)| {
            let distance = atoms[first].coord.distance_to(&atoms[second].coord).ok()?;
            (distance < threshold).then_some(Collision {
                first,
                second,
                distance,
            })
        }))
}
