use crate::core::numeric::number::Number;
use crate::engine::error::CellError;
use itertools::Itertools;
use nalgebra::Vector3;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The coordinate system a [`Coordinate`] is expressed in.
///
/// `Reduced` (fractions of the lattice vectors) and `Cartesian` are the systems the
/// transforms know about; any other tag supplied by a collaborator is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CoordinateSystem {
    #[default]
    Reduced,
    Cartesian,
    Named(String),
}

impl FromStr for CoordinateSystem {
    type Err = Infallible;

    /// Parses a system tag. Matching of the known systems is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "reduced" => CoordinateSystem::Reduced,
            "cartesian" => CoordinateSystem::Cartesian,
            _ => CoordinateSystem::Named(s.to_string()),
        })
    }
}

impl From<&str> for CoordinateSystem {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(system) => system,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateSystem::Reduced => write!(f, "reduced"),
            CoordinateSystem::Cartesian => write!(f, "cartesian"),
            CoordinateSystem::Named(name) => write!(f, "{}", name),
        }
    }
}

/// An immutable position vector tagged with its coordinate system.
///
/// Every operation returns a new `Coordinate`. Operations between two coordinates require
/// the same system and dimension; operations with a raw component slice require the same
/// dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    values: Vec<Number>,
    system: CoordinateSystem,
}

impl Coordinate {
    pub fn new(values: Vec<Number>, system: CoordinateSystem) -> Self {
        Self { values, system }
    }

    /// Creates a coordinate in the reduced system.
    pub fn reduced<T: Into<Number>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(
            values.into_iter().map(Into::into).collect(),
            CoordinateSystem::Reduced,
        )
    }

    pub fn from_vector3(vector: &Vector3<f64>, system: CoordinateSystem) -> Self {
        Self::new(vector.iter().map(|&v| Number::Float(v)).collect(), system)
    }

    pub fn values(&self) -> &[Number] {
        &self.values
    }

    pub fn system(&self) -> &CoordinateSystem {
        &self.system
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Component-wise sum with another coordinate.
    ///
    /// # Errors
    ///
    /// [`CellError::IncompatibleCoordinateSystem`] when the systems differ and
    /// [`CellError::DimensionMismatch`] when the dimensions differ.
    pub fn checked_add(&self, other: &Coordinate) -> Result<Coordinate, CellError> {
        self.ensure_same_system(other)?;
        self.zip_with(&other.values, |a, b| a + b)
    }

    /// Component-wise difference with another coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`Coordinate::checked_add`].
    pub fn checked_sub(&self, other: &Coordinate) -> Result<Coordinate, CellError> {
        self.ensure_same_system(other)?;
        self.zip_with(&other.values, |a, b| a - b)
    }

    /// Adds a raw offset to every component.
    pub fn translated(&self, offset: &[Number]) -> Result<Coordinate, CellError> {
        self.zip_with(offset, |a, b| a + b)
    }

    /// Multiplies every component by the matching factor.
    pub fn scaled(&self, factors: &[Number]) -> Result<Coordinate, CellError> {
        self.zip_with(factors, |a, b| a * b)
    }

    /// Divides every component by the matching divisor.
    pub fn divided(&self, divisors: &[Number]) -> Result<Coordinate, CellError> {
        self.zip_with(divisors, |a, b| a / b)
    }

    /// Multiplies every component by a single scalar.
    pub fn scaled_uniformly(&self, factor: Number) -> Coordinate {
        self.map(|v| v * factor)
    }

    /// The Euclidean norm of the component vector.
    pub fn norm(&self) -> f64 {
        self.values
            .iter()
            .map(|v| v.to_f64().powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// The Euclidean distance between two coordinates of the same system.
    pub fn distance_to(&self, other: &Coordinate) -> Result<f64, CellError> {
        Ok(self.checked_sub(other)?.norm())
    }

    /// Maps every component onto `[0, 1)` by taking it modulo 1.
    pub fn wrapped_to_unit_cell(&self) -> Coordinate {
        self.map(|v| v.modulo_one())
    }

    /// Tests membership of the half-open unit cell with a boundary tolerance.
    ///
    /// A component `c` is accepted when `-tolerance <= c < 1 - tolerance`, so values that
    /// round to either face of the cell are attributed to the lower face only. Accepted
    /// components within `tolerance` of zero are replaced by an exact zero. Returns `None`
    /// when any component falls outside.
    pub fn snapped_into_unit_cell(&self, tolerance: f64) -> Option<Coordinate> {
        let mut snapped = Vec::with_capacity(self.values.len());
        for value in &self.values {
            let v = value.to_f64();
            if v < -tolerance || v >= 1.0 - tolerance {
                return None;
            }
            snapped.push(if v.abs() <= tolerance {
                Number::zero()
            } else {
                *value
            });
        }
        Some(Coordinate::new(snapped, self.system.clone()))
    }

    /// Converts a 3-D coordinate to a floating-point column vector.
    pub fn to_vector3(&self) -> Result<Vector3<f64>, CellError> {
        match self.values.as_slice() {
            [x, y, z] => Ok(Vector3::new(x.to_f64(), y.to_f64(), z.to_f64())),
            _ => Err(CellError::DimensionMismatch {
                expected: 3,
                found: self.values.len(),
            }),
        }
    }

    fn map(&self, f: impl Fn(Number) -> Number) -> Coordinate {
        Coordinate::new(
            self.values.iter().map(|&v| f(v)).collect(),
            self.system.clone(),
        )
    }

    fn zip_with(
        &self,
        other: &[Number],
        f: impl Fn(Number, Number) -> Number,
    ) -> Result<Coordinate, CellError> {
        if other.len() != self.values.len() {
            return Err(CellError::DimensionMismatch {
                expected: self.values.len(),
                found: other.len(),
            });
        }
        Ok(Coordinate::new(
            self.values
                .iter()
                .zip(other)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            self.system.clone(),
        ))
    }

    fn ensure_same_system(&self, other: &Coordinate) -> Result<(), CellError> {
        if self.system == other.system {
            Ok(())
        } else {
            Err(CellError::IncompatibleCoordinateSystem {
                left: self.system.clone(),
                right: other.system.clone(),
            })
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({})", self.values.iter().join(", "), self.system)
    }
}
