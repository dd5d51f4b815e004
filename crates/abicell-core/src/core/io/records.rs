use crate::core::models::atom::Atom;
use crate::core::models::coordinate::{Coordinate, CoordinateSystem};
use crate::core::numeric::parser::{RawValue, parse_coordinate_array};
use crate::engine::error::CellError;
use serde::{Deserialize, Serialize};

/// The atom record exchanged with collaborators: `{ "znucl": 14, "coord": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub znucl: u32,
    pub coord: CoordinateRecord,
}

/// A coordinate as supplied by a collaborator.
///
/// A bare array is read as a reduced coordinate. The tagged form defaults to the reduced
/// system when `coordinate_system` is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateRecord {
    Bare(Vec<RawValue>),
    Tagged {
        coordinate_array: Vec<RawValue>,
        #[serde(default = "default_coordinate_system")]
        coordinate_system: String,
    },
}

fn default_coordinate_system() -> String {
    CoordinateSystem::Reduced.to_string()
}

impl CoordinateRecord {
    /// Resolves the record into a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// [`CellError::MalformedCoordinateValue`] if any element cannot be parsed.
    pub fn to_coordinate(&self) -> Result<Coordinate, CellError> {
        match self {
            CoordinateRecord::Bare(values) => Ok(Coordinate::new(
                parse_coordinate_array(values)?,
                CoordinateSystem::Reduced,
            )),
            CoordinateRecord::Tagged {
                coordinate_array,
                coordinate_system,
            } => Ok(Coordinate::new(
                parse_coordinate_array(coordinate_array)?,
                CoordinateSystem::from(coordinate_system.as_str()),
            )),
        }
    }
}

impl From<&Coordinate> for CoordinateRecord {
    fn from(coord: &Coordinate) -> Self {
        CoordinateRecord::Tagged {
            coordinate_array: coord.values().iter().map(|&v| RawValue::from(v)).collect(),
            coordinate_system: coord.system().to_string(),
        }
    }
}

impl AtomRecord {
    pub fn to_atom(&self) -> Result<Atom, CellError> {
        Ok(Atom::new(self.znucl, self.coord.to_coordinate()?))
    }
}

impl From<&Atom> for AtomRecord {
    fn from(atom: &Atom) -> Self {
        Self {
            znucl: atom.znucl,
            coord: CoordinateRecord::from(&atom.coord),
        }
    }
}

/// Resolves a list of collaborator records into atoms, preserving order.
///
/// # Errors
///
/// Fails on the first record whose coordinate cannot be parsed.
pub fn parse_atoms(records: &[AtomRecord]) -> Result<Vec<Atom>, CellError> {
    records.iter().map(AtomRecord::to_atom).collect()
}

/// Converts atoms back into the collaborator record shape.
pub fn to_records(atoms: &[Atom]) -> Vec<AtomRecord> {
    atoms.iter().map(AtomRecord::from).collect()
}
