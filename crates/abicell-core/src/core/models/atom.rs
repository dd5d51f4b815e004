use super::coordinate::Coordinate;
use crate::core::elements;
use std::fmt;

/// An atom of a unit cell: its nuclear charge and its position.
///
/// Atoms are plain values. Transforms never modify an atom in place; they build new atoms
/// with [`Atom::with_coord`] or [`Atom::with_znucl`].
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atomic number (nuclear charge) identifying the element.
    pub znucl: u32,
    /// The position of the atom, normally in the reduced system.
    pub coord: Coordinate,
}

impl Atom {
    pub fn new(znucl: u32, coord: Coordinate) -> Self {
        Self { znucl, coord }
    }

    /// Returns a copy of this atom placed at `coord`.
    pub fn with_coord(&self, coord: Coordinate) -> Self {
        Self {
            znucl: self.znucl,
            coord,
        }
    }

    /// Returns a copy of this atom with a different element.
    pub fn with_znucl(&self, znucl: u32) -> Self {
        Self {
            znucl,
            coord: self.coord.clone(),
        }
    }

    /// The chemical symbol of the element, if `znucl` is a known atomic number.
    pub fn symbol(&self) -> Option<&'static str> {
        elements::symbol_for(self.znucl)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{} (znucl {}) at {}", symbol, self.znucl, self.coord),
            None => write!(f, "znucl {} at {}", self.znucl, self.coord),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numeric::number::Number;

    #[test]
    fn new_atom_keeps_znucl_and_coordinate() {
        let atom = Atom::new(14, Coordinate::reduced([0, 0, 0]));
        assert_eq!(atom.znucl, 14);
        assert_eq!(atom.coord, Coordinate::reduced([0, 0, 0]));
        assert_eq!(atom.symbol(), Some("Si"));
    }

    #[test]
    fn with_helpers_leave_the_original_untouched() {
        let atom = Atom::new(6, Coordinate::reduced([0, 0, 0]));
        let moved = atom.with_coord(Coordinate::reduced([1, 0, 0]));
        let swapped = atom.with_znucl(5);

        assert_eq!(atom.coord, Coordinate::reduced([0, 0, 0]));
        assert_eq!(atom.znucl, 6);
        assert_eq!(moved.znucl, 6);
        assert_eq!(moved.coord, Coordinate::reduced([1, 0, 0]));
        assert_eq!(swapped.znucl, 5);
        assert_eq!(swapped.coord, atom.coord);
    }

    #[test]
    fn display_includes_symbol_when_known() {
        let atom = Atom::new(
            5,
            Coordinate::reduced([Number::ratio(1, 2).unwrap(), Number::zero(), Number::zero()]),
        );
        assert_eq!(atom.to_string(), "B (znucl 5) at [1/2, 0, 0] (reduced)");

        let unknown = Atom::new(0, Coordinate::reduced([0, 0, 0]));
        assert_eq!(unknown.to_string(), "znucl 0 at [0, 0, 0] (reduced)");
    }
}
