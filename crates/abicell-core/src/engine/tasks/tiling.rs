use crate::core::models::atom::Atom;
use crate::core::numeric::number::Number;
use crate::engine::error::CellError;

/// Replicates `atoms` over the in-plane translations `(a1, a2, 0)` with
/// `-num_times <= a1, a2 <= num_times`.
///
/// The output is ordered by `a1` (outer), then `a2`, then the input atoms, and holds
/// `atoms.len() * (2 * num_times + 1)²` atoms. `num_times = 0` returns a copy of the input.
/// Exact coordinates stay exact.
///
/// # Errors
///
/// [`CellError::DimensionMismatch`] if an atom's coordinate is not 3-D.
pub fn repeat_atom_grid(atoms: &[Atom], num_times: u32) -> Result<Vec<Atom>, CellError> {
    let n = i64::from(num_times);
    let side = 2 * num_times as usize + 1;
    let capacity = side
        .checked_mul(side)
        .and_then(|cells| cells.checked_mul(atoms.len()))
        .unwrap_or_default();
    let mut repeated = Vec::with_capacity(capacity);
    for a1 in -n..=n {
        for a2 in -n..=n {
            let offset = [Number::from(a1), Number::from(a2), Number::zero()];
            for atom in atoms {
                repeated.push(atom.with_coord(atom.coord.translated(&offset)?));
            }
        }
    }
    Ok(repeated)
}

/// Repeats the cell `factors[axis]` times along each axis while keeping the result inside
/// the original unit cell.
///
/// Every coordinate is first divided by `factors`, shrinking the cell to a sub-cell. Then,
/// for each axis in turn, the list built so far is extended with `factors[axis] - 1` copies
/// shifted by `k / factors[axis]` along that axis. The output keeps the input order within
/// each copy and holds `atoms.len() * nx * ny * nz` atoms.
///
/// # Errors
///
/// [`CellError::DegenerateRepeatFactor`] if any factor is zero (the repeated cell would be
/// empty), and [`CellError::DimensionMismatch`] if a coordinate is not 3-D.
pub fn repeat_atoms_in_unit_cell(
    atoms: &[Atom],
    factors: [u32; 3],
) -> Result<Vec<Atom>, CellError> {
    if factors.contains(&0) {
        return Err(CellError::DegenerateRepeatFactor { factors });
    }
    let divisors = factors.map(Number::from);
    let sub_cell = divisors.map(|d| Number::one() / d);

    let mut repeated = atoms
        .iter()
        .map(|atom| Ok(atom.with_coord(atom.coord.divided(&divisors)?)))
        .collect::<Result<Vec<_>, CellError>>()?;

    for (axis, &factor) in factors.iter().enumerate() {
        let prefix_len = repeated.len();
        for k in 1..factor {
            let mut offset = [Number::zero(); 3];
            offset[axis] = sub_cell[axis] * Number::from(k);
            for index in 0..prefix_len {
                let copy = repeated[index].with_coord(repeated[index].coord.translated(&offset)?);
                repeated.push(copy);
            }
        }
    }
    Ok(repeated)
}

/// Maps every atom back into the unit cell by taking each component modulo 1.
pub fn wrap_atoms_to_unit_cell(atoms: &[Atom]) -> Vec<Atom> {
    atoms
        .iter()
        .map(|atom| atom.with_coord(atom.coord.wrapped_to_unit_cell()))
        .collect()
}
