use super::rotation::{dilate_atom_grid, rotate_atom_grid};
use super::tiling::repeat_atom_grid;
use crate::core::models::atom::Atom;
use crate::core::models::lattice::LatticeBasis;
use crate::core::numeric::number::Number;
use crate::core::utils::geometry::{rotation_from_axis_angle, signed_angle_between};
use crate::engine::config::TransformConfig;
use crate::engine::error::{CellError, TransformWarning};
use crate::engine::progress::StageOutput;
use nalgebra::Vector3;
use std::fmt;
use tracing::{debug, info, instrument};

/// An integer in-plane lattice vector `p·a1 + q·a2` that becomes the first vector of a
/// chiral cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chirality {
    p: i64,
    q: i64,
}

impl Chirality {
    pub fn new(p: i64, q: i64) -> Result<Self, CellError> {
        if p == 0 && q == 0 {
            return Err(CellError::InvalidChirality {
                chirality: vec![p, q],
                reason: "the chirality vector must be non-zero",
            });
        }
        Ok(Self { p, q })
    }

    /// Reads `[p, q]` or `[p, q, 0]`.
    pub fn from_components(components: &[i64]) -> Result<Self, CellError> {
        match *components {
            [p, q] | [p, q, 0] => Self::new(p, q),
            [_, _, _] => Err(CellError::InvalidChirality {
                chirality: components.to_vec(),
                reason: "the third component must be zero",
            }),
            _ => Err(CellError::InvalidChirality {
                chirality: components.to_vec(),
                reason: "expected two components, or three with a zero third component",
            }),
        }
    }

    pub fn p(&self) -> i64 {
        self.p
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    /// `p·a1 + q·a2` in Cartesian space.
    pub fn real_space_vector(&self, basis: &LatticeBasis) -> Vector3<f64> {
        basis.a1() * self.p as f64 + basis.a2() * self.q as f64
    }
}

impl fmt::Display for Chirality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.p, self.q)
    }
}

/// The atoms of a chiral cell and the numbers a caller needs to describe it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiralCell {
    pub atoms: Vec<Atom>,
    /// `N · |V|² / |a1|²`, which is `N · (p² + q²)` for an orthonormal basis.
    pub expected_atom_count: usize,
    /// Factor to apply to the cell lengths: `[|V| / |a1|, |V| / |a1|, 1]`.
    pub cell_scaling: [f64; 3],
    /// Angle in radians that brought `V` onto the `a1` direction.
    pub rotation_angle: f64,
    /// Half-width of the tiling grid used before filtering.
    pub repetitions: u32,
}

impl ChiralCell {
    pub fn count_mismatch(&self) -> Option<TransformWarning> {
        (self.atoms.len() != self.expected_atom_count).then(|| {
            TransformWarning::AtomCountMismatch {
                expected: self.expected_atom_count,
                actual: self.atoms.len(),
            }
        })
    }
}

impl StageOutput for ChiralCell {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// Builds the cell whose first lattice vector is `V = p·a1 + q·a2`.
///
/// The source cell is tiled, rotated so `V` lies along `a1`, shrunk by `|V| / |a1|` in the
/// plane and cut back to the half-open unit cell. Components within
/// `config.boundary_tolerance` of a face count as on that face; those near zero are snapped
/// to an exact zero. The atom count is not enforced here, see [`ChiralCell::count_mismatch`].
///
/// # Errors
///
/// [`CellError::SingularBasis`] for a degenerate basis and [`CellError::DimensionMismatch`]
/// for atoms without 3-D coordinates.
#[instrument(skip_all, name = "chiral_cell_builder", fields(chirality = %chirality))]
pub fn build_chiral_cell(
    atoms: &[Atom],
    chirality: Chirality,
    basis: &LatticeBasis,
    config: &TransformConfig,
) -> Result<ChiralCell, CellError> {
    let axis = basis.in_plane_normal()?;
    let a1 = basis.a1();
    let v = chirality.real_space_vector(basis);
    let rotation_angle = -signed_angle_between(&a1, &v, &axis);
    let scale = v.norm() / a1.norm();

    let repetitions = tiling_repetitions(basis, rotation_angle, scale, config.overshoot_margin)?;
    debug!(
        angle = rotation_angle,
        scale, repetitions, "Derived chiral cell geometry."
    );

    let tiled = repeat_atom_grid(atoms, repetitions)?;
    let rotated = rotate_atom_grid(&tiled, rotation_angle, basis)?;
    let dilated = dilate_atom_grid(&rotated, Number::Float(1.0 / scale))?;
    debug!(tiled = tiled.len(), "Tiled and rotated source cell.");

    let kept: Vec<Atom> = dilated
        .iter()
        .filter_map(|atom| {
            atom.coord
                .snapped_into_unit_cell(config.boundary_tolerance)
                .map(|coord| atom.with_coord(coord))
        })
        .collect();

    let area_ratio = (v.norm_squared() / a1.norm_squared()).round() as usize;
    let cell = ChiralCell {
        expected_atom_count: atoms.len() * area_ratio,
        atoms: kept,
        cell_scaling: [scale, scale, 1.0],
        rotation_angle,
        repetitions,
    };
    info!(
        atoms = cell.atoms.len(),
        expected = cell.expected_atom_count,
        "Built chiral cell."
    );
    Ok(cell)
}

/// Half-width of the tiling grid that covers the new cell.
///
/// The new cell's in-plane edges are rotated back into the source frame and expressed in
/// source reduced coordinates; the grid must reach past the farthest corner. The lower
/// bound is `floor(scale) + margin`.
fn tiling_repetitions(
    basis: &LatticeBasis,
    rotation_angle: f64,
    scale: f64,
    margin: u32,
) -> Result<u32, CellError> {
    let back = rotation_from_axis_angle(&basis.in_plane_normal()?, -rotation_angle);
    let v = basis.to_reduced(&(back * (basis.a1() * scale)))?;
    let w = basis.to_reduced(&(back * (basis.a2() * scale)))?;
    let reach = [v, w, v + w]
        .iter()
        .flat_map(|corner| [corner.x.abs(), corner.y.abs()])
        .fold(0.0f64, f64::max);
    let coverage = reach.ceil() as u32 + 1;
    Ok((scale.floor() as u32 + margin).max(coverage))
}
