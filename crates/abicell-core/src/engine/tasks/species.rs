use crate::core::models::atom::Atom;
use crate::core::models::coordinate::Coordinate;
use itertools::Itertools;

/// Atoms grouped by element, with the type indices a cell description needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesAssignment {
    /// Distinct atomic numbers in ascending order.
    pub znucl: Vec<u32>,
    /// 1-based index into `znucl` for each atom of `atoms`.
    pub typat: Vec<usize>,
    /// The input atoms, stably sorted by atomic number.
    pub atoms: Vec<Atom>,
}

impl SpeciesAssignment {
    pub fn natom(&self) -> usize {
        self.atoms.len()
    }

    pub fn ntypat(&self) -> usize {
        self.znucl.len()
    }

    /// Atom positions in the same order as `typat`.
    pub fn xred(&self) -> impl Iterator<Item = &Coordinate> {
        self.atoms.iter().map(|atom| &atom.coord)
    }
}

/// Sorts atoms by element and assigns each one its 1-based species index.
///
/// The sort is stable, so atoms of one element keep their relative order.
pub fn assign_species(atoms: &[Atom]) -> SpeciesAssignment {
    let atoms: Vec<Atom> = atoms
        .iter()
        .sorted_by_key(|atom| atom.znucl)
        .cloned()
        .collect();
    let znucl: Vec<u32> = atoms.iter().map(|atom| atom.znucl).dedup().collect();
    let typat = atoms
        .iter()
        .map(|atom| {
            // `znucl` is sorted and holds every atom's element.
            znucl.partition_point(|&z| z < atom.znucl) + 1
        })
        .collect();
    SpeciesAssignment {
        znucl,
        typat,
        atoms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numeric::number::Number;

    fn atom(znucl: u32, x: i64) -> Atom {
        Atom::new(znucl, Coordinate::reduced([x, 0, 0]))
    }

    #[test]
    fn species_are_sorted_and_one_based() {
        let atoms = vec![atom(14, 0), atom(5, 1), atom(14, 2), atom(6, 3)];

        let species = assign_species(&atoms);

        assert_eq!(species.znucl, vec![5, 6, 14]);
        assert_eq!(species.typat, vec![1, 2, 3, 3]);
        assert_eq!(species.natom(), 4);
        assert_eq!(species.ntypat(), 3);
    }

    #[test]
    fn sort_is_stable_within_an_element() {
        let atoms = vec![atom(14, 0), atom(5, 1), atom(14, 2)];

        let species = assign_species(&atoms);

        let xs: Vec<Number> = species.xred().map(|c| c.values()[0]).collect();
        assert_eq!(xs, vec![Number::from(1), Number::from(0), Number::from(2)]);
    }

    #[test]
    fn empty_cell_has_no_species() {
        let species = assign_species(&[]);
        assert_eq!(species.natom(), 0);
        assert_eq!(species.ntypat(), 0);
        assert!(species.typat.is_empty());
    }
}
