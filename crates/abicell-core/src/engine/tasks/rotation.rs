use crate::core::models::atom::Atom;
use crate::core::models::coordinate::Coordinate;
use crate::core::models::lattice::LatticeBasis;
use crate::core::numeric::number::Number;
use crate::core::utils::geometry::rotation_from_axis_angle;
use crate::engine::error::CellError;
use nalgebra::Matrix3;

/// The reduced-coordinate form `B⁻¹ · R(angle) · B` of a rotation about the normal of the
/// `a1`/`a2` plane.
///
/// Rotating in real space and mapping back keeps physical angles and lengths intact on
/// non-orthogonal lattices.
pub fn basis_rotation_matrix(angle: f64, basis: &LatticeBasis) -> Result<Matrix3<f64>, CellError> {
    let axis = basis.in_plane_normal()?;
    let rotation = rotation_from_axis_angle(&axis, angle);
    Ok(basis.inverse()? * rotation.matrix() * basis.matrix())
}

/// Rotates every atom by `angle` radians about the normal of the basis plane.
///
/// Each coordinate keeps its system tag; the components become floating point.
///
/// # Errors
///
/// [`CellError::SingularBasis`] for a degenerate basis and [`CellError::DimensionMismatch`]
/// for a coordinate that is not 3-D.
pub fn rotate_atom_grid(
    atoms: &[Atom],
    angle: f64,
    basis: &LatticeBasis,
) -> Result<Vec<Atom>, CellError> {
    let transform = basis_rotation_matrix(angle, basis)?;
    atoms
        .iter()
        .map(|atom| {
            let rotated = transform * atom.coord.to_vector3()?;
            Ok(atom.with_coord(Coordinate::from_vector3(
                &rotated,
                atom.coord.system().clone(),
            )))
        })
        .collect()
}

/// Scales the first two components of every coordinate by `factor`, leaving the third.
///
/// Exact factors keep exact coordinates exact.
pub fn dilate_atom_grid(atoms: &[Atom], factor: Number) -> Result<Vec<Atom>, CellError> {
    let factors = [factor, factor, Number::one()];
    atoms
        .iter()
        .map(|atom| Ok(atom.with_coord(atom.coord.scaled(&factors)?)))
        .collect()
}

/// Maps square-grid coordinates onto the 60° unit rhombus: `(x + y/2, y·√3/2, z)`.
pub fn shear_to_rhombal_grid(atoms: &[Atom]) -> Result<Vec<Atom>, CellError> {
    let half = Number::one() / Number::from(2);
    let height = Number::Float(3.0f64.sqrt() / 2.0);
    atoms
        .iter()
        .map(|atom| match atom.coord.values() {
            &[x, y, z] => Ok(atom.with_coord(Coordinate::new(
                vec![x + y * half, y * height, z],
                atom.coord.system().clone(),
            ))),
            values => Err(CellError::DimensionMismatch {
                expected: 3,
                found: values.len(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    fn frac(n: i64, d: i64) -> Number {
        Number::ratio(n, d).unwrap()
    }

    fn vector_of(atom: &Atom) -> Vector3<f64> {
        atom.coord.to_vector3().unwrap()
    }

    #[test]
    fn quarter_turn_in_orthonormal_basis() {
        let atoms = vec![Atom::new(6, Coordinate::reduced([1, 0, 0]))];
        let rotated = rotate_atom_grid(&atoms, FRAC_PI_2, &LatticeBasis::identity()).unwrap();
        assert_relative_eq!(vector_of(&rotated[0]), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(rotated[0].znucl, 6);
    }

    #[test]
    fn rhombic_basis_rotates_a1_onto_a2() {
        let atoms = vec![Atom::new(6, Coordinate::reduced([1, 0, 0]))];
        let rotated = rotate_atom_grid(&atoms, FRAC_PI_3, &LatticeBasis::rhombic_60()).unwrap();
        assert_relative_eq!(vector_of(&rotated[0]), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_round_trip_restores_coordinates() {
        let atoms = vec![
            Atom::new(6, Coordinate::reduced([frac(1, 3), frac(2, 3), frac(1, 2)])),
            Atom::new(7, Coordinate::reduced([0.9, -0.25, 0.1])),
        ];
        for basis in [LatticeBasis::identity(), LatticeBasis::rhombic_60()] {
            let there = rotate_atom_grid(&atoms, 0.4321, &basis).unwrap();
            let back = rotate_atom_grid(&there, -0.4321, &basis).unwrap();
            for (original, restored) in atoms.iter().zip(&back) {
                assert_relative_eq!(vector_of(original), vector_of(restored), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn rotation_keeps_system_and_third_component() {
        let atom = Atom::new(
            6,
            Coordinate::new(
                vec![Number::Float(0.3), Number::Float(0.4), Number::Float(0.7)],
                "cartesian".into(),
            ),
        );
        let rotated = rotate_atom_grid(&[atom.clone()], 1.1, &LatticeBasis::identity()).unwrap();
        assert_eq!(rotated[0].coord.system(), atom.coord.system());
        assert_eq!(rotated[0].coord.values()[2], Number::Float(0.7));
    }

    #[test]
    fn rotation_requires_three_components() {
        let atoms = vec![Atom::new(6, Coordinate::reduced([1, 0]))];
        assert_eq!(
            rotate_atom_grid(&atoms, 0.5, &LatticeBasis::identity()),
            Err(CellError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn singular_basis_is_rejected() {
        let basis = LatticeBasis::from_rows([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let atoms = vec![Atom::new(6, Coordinate::reduced([1, 0, 0]))];
        assert_eq!(
            rotate_atom_grid(&atoms, 0.5, &basis),
            Err(CellError::SingularBasis)
        );
    }

    #[test]
    fn dilation_scales_in_plane_components_exactly() {
        let atoms = vec![Atom::new(6, Coordinate::reduced([frac(1, 2), frac(1, 3), frac(3, 4)]))];
        let dilated = dilate_atom_grid(&atoms, frac(1, 2)).unwrap();
        assert_eq!(
            dilated[0].coord,
            Coordinate::reduced([frac(1, 4), frac(1, 6), frac(3, 4)])
        );
        assert!(dilated[0].coord.values().iter().all(Number::is_exact));
    }

    #[test]
    fn shear_maps_unit_square_corner_onto_rhombus() {
        let atoms = vec![Atom::new(6, Coordinate::reduced([1, 1, 0]))];
        let sheared = shear_to_rhombal_grid(&atoms).unwrap();
        let values = sheared[0].coord.values();
        assert_eq!(values[0], frac(3, 2));
        assert!(values[0].is_exact());
        assert_relative_eq!(values[1].to_f64(), 3.0f64.sqrt() / 2.0);
        assert_eq!(values[2], Number::zero());
    }
}
