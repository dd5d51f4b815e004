//! # abicell
//!
//! Exact unit-cell transformations for preparing ABINIT calculations: supercell
//! replication, chiral (rotated) supercells, doping and collision checks.
//!
//! ## Architecture
//!
//! The library keeps the same three layers throughout.
//!
//! - **[`core`]: The Foundation.** Stateless value types (`Number`, `Coordinate`, `Atom`,
//!   `LatticeBasis`), the literal parser, the element table, the collaborator record shape
//!   and rotation helpers.
//!
//! - **[`engine`]: The Transforms.** Pure tasks over atom lists (tiling, rotation, chiral
//!   cell construction, collision detection, doping, species assignment) plus their
//!   configuration, errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Entry points that run the engine tasks for one
//!   transform, check the result and return the new atoms with a cell scaling factor and any
//!   warnings.
//!
//! Reading and writing concrete file formats is left to the caller: atoms come in and go out
//! as [`AtomRecord`](core::io::records::AtomRecord) values.

pub mod core;
pub mod engine;
pub mod workflows;
