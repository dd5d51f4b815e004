use crate::engine::error::CellError;
use nalgebra::{Matrix3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// The real-space lattice vectors of a unit cell.
///
/// The vectors `a1, a2, a3` are stored as the columns of a 3x3 matrix `B`, so that a reduced
/// coordinate `c` sits at `B * c` in Cartesian space. Serialized form is a list of three rows,
/// one lattice vector per row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 3]; 3]", into = "[[f64; 3]; 3]")]
pub struct LatticeBasis {
    matrix: Matrix3<f64>,
}

impl Default for LatticeBasis {
    fn default() -> Self {
        Self::identity()
    }
}

impl LatticeBasis {
    /// The orthonormal basis.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn from_vectors(a1: Vector3<f64>, a2: Vector3<f64>, a3: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix3::from_columns(&[a1, a2, a3]),
        }
    }

    /// Builds a basis from three rows, each row being one lattice vector.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [a1, a2, a3] = rows.map(Vector3::from);
        Self::from_vectors(a1, a2, a3)
    }

    /// The 60° rhombus with unit-length in-plane vectors and an orthogonal unit `a3`.
    pub fn rhombic_60() -> Self {
        Self::from_vectors(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.5, 3.0f64.sqrt() / 2.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn a1(&self) -> Vector3<f64> {
        self.matrix.column(0).into_owned()
    }

    pub fn a2(&self) -> Vector3<f64> {
        self.matrix.column(1).into_owned()
    }

    pub fn a3(&self) -> Vector3<f64> {
        self.matrix.column(2).into_owned()
    }

    /// Maps a reduced coordinate vector to Cartesian space.
    pub fn to_cartesian(&self, reduced: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * reduced
    }

    /// Maps a Cartesian vector back to reduced coordinates.
    pub fn to_reduced(&self, cartesian: &Vector3<f64>) -> Result<Vector3<f64>, CellError> {
        Ok(self.inverse()? * cartesian)
    }

    /// `B⁻¹`, or [`CellError::SingularBasis`] when the lattice vectors are linearly dependent.
    pub fn inverse(&self) -> Result<Matrix3<f64>, CellError> {
        self.matrix.try_inverse().ok_or(CellError::SingularBasis)
    }

    /// The unit normal of the plane spanned by `a1` and `a2`.
    pub fn in_plane_normal(&self) -> Result<Unit<Vector3<f64>>, CellError> {
        Unit::try_new(self.a1().cross(&self.a2()), f64::EPSILON).ok_or(CellError::SingularBasis)
    }
}

impl From<[[f64; 3]; 3]> for LatticeBasis {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<LatticeBasis> for [[f64; 3]; 3] {
    fn from(basis: LatticeBasis) -> Self {
        [basis.a1(), basis.a2(), basis.a3()].map(|v| [v.x, v.y, v.z])
    }
}
