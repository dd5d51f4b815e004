//! # Core Module
//!
//! Stateless building blocks for unit-cell manipulation.
//!
//! - **Numbers** ([`numeric`]) - exact rationals with floating-point fallback, and the parser
//!   that resolves collaborator literals into them
//! - **Models** ([`models`]) - coordinates, atoms and lattice bases
//! - **Elements** ([`elements`]) - the static atomic-number/symbol table
//! - **Records** ([`io`]) - the atom record shape shared with collaborators
//! - **Geometry** ([`utils`]) - rotation and angle helpers

pub mod elements;
pub mod io;
pub mod models;
pub mod numeric;
pub mod utils;
