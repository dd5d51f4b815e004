//! # Core Models Module
//!
//! The value types every transform consumes and produces.
//!
//! - [`coordinate`] - immutable position vectors tagged with a coordinate system
//! - [`atom`] - an atomic number paired with its coordinate
//! - [`lattice`] - the real-space lattice vectors used to rotate reduced coordinates
//!
//! ```ignore
//! use abicell::core::models::{atom::Atom, coordinate::Coordinate};
//!
//! let silicon = Atom::new(14, Coordinate::reduced([0, 0, 0]));
//! assert_eq!(silicon.symbol(), Some("Si"));
//! ```

pub mod atom;
pub mod coordinate;
pub mod lattice;
