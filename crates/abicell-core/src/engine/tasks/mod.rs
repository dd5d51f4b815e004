//! Pure transforms over atom lists.
//!
//! Each submodule implements one step of cell preparation: replicating a cell, rotating it
//! within its lattice basis, cutting an oriented chiral cell out of a tiled grid, detecting
//! near-duplicate atoms, substituting dopants and grouping atoms by species. Workflows
//! compose these steps.

pub mod chirality;
pub mod collisions;
pub mod doping;
pub mod rotation;
pub mod species;
pub mod tiling;
