//! # Workflows Module
//!
//! The public entry points. Each workflow takes a parsed atom list and its transform
//! parameters, runs the engine tasks in order, checks the result and returns the new atom
//! list together with any warnings.
//!
//! - **Repeat** ([`repeat`]) - replicate a cell inside itself along each axis
//! - **Chirality** ([`chirality`]) - cut an oriented supercell along an integer lattice vector
//! - **Dope** ([`dope`]) - substitute elements by coordinate match
//!
//! Warnings never abort a workflow. They are logged with `tracing`, forwarded to the
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and returned to the caller.

use crate::core::models::atom::Atom;
use crate::engine::error::{CellError, TransformWarning};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::collisions::get_collisions;
use tracing::warn;

pub mod chirality;
pub mod dope;
pub mod repeat;

/// A transformed cell, ready for a collaborator to re-serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub atoms: Vec<Atom>,
    /// Factors the collaborator applies to its cell lengths (`acell`).
    pub cell_scaling: [f64; 3],
    pub warnings: Vec<TransformWarning>,
}

impl TransformResult {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

fn collision_warning(
    atoms: &[Atom],
    threshold: f64,
) -> Result<Option<TransformWarning>, CellError> {
    let pairs: Vec<(usize, usize)> = get_collisions(atoms, threshold)?
        .map(|collision| collision.indices())
        .collect();
    Ok((!pairs.is_empty()).then_some(TransformWarning::Collisions { pairs }))
}

fn surface_warnings(warnings: &[TransformWarning], reporter: &ProgressReporter) {
    for warning in warnings {
        warn!("{}", warning);
        reporter.report(Progress::Warning(warning.to_string()));
    }
}
