use crate::core::models::atom::Atom;
use crate::engine::error::CellError;

/// Substitutes atomic numbers by coordinate match.
///
/// For each dopant in order, the first atom whose coordinate equals the dopant's (same system,
/// numerically equal components) takes the dopant's `znucl`. The input list is left untouched.
///
/// # Errors
///
/// [`CellError::NoMatchingAtom`] on the first dopant without a matching atom. The error
/// carries that dopant and the list with every earlier substitution already applied.
pub fn dope_atoms(atoms: &[Atom], dopants: &[Atom]) -> Result<Vec<Atom>, CellError> {
    let mut doped = atoms.to_vec();
    for dopant in dopants {
        match doped.iter().position(|atom| atom.coord == dopant.coord) {
            Some(index) => doped[index].znucl = dopant.znucl,
            None => {
                return Err(CellError::NoMatchingAtom {
                    dopant: Box::new(dopant.clone()),
                    partially_doped: doped,
                });
            }
        }
    }
    Ok(doped)
}
