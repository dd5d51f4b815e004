use super::{TransformResult, collision_warning, surface_warnings};
use crate::core::models::atom::Atom;
use crate::engine::config::TransformConfig;
use crate::engine::error::CellError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks::tiling::repeat_atoms_in_unit_cell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How many times to repeat a cell: one factor for every axis, or one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepeatFactor {
    Uniform(u32),
    PerAxis([u32; 3]),
}

impl RepeatFactor {
    pub fn factors(&self) -> [u32; 3] {
        match *self {
            RepeatFactor::Uniform(n) => [n; 3],
            RepeatFactor::PerAxis(factors) => factors,
        }
    }

    /// Whether any factor is zero, i.e. the repeated cell would hold no atoms.
    pub fn is_degenerate(&self) -> bool {
        self.factors().contains(&0)
    }
}

impl From<u32> for RepeatFactor {
    fn from(n: u32) -> Self {
        RepeatFactor::Uniform(n)
    }
}

impl From<[u32; 3]> for RepeatFactor {
    fn from(factors: [u32; 3]) -> Self {
        RepeatFactor::PerAxis(factors)
    }
}

/// Repeats the cell inside itself and scales the cell lengths by the factors.
///
/// # Errors
///
/// [`CellError::DegenerateRepeatFactor`] for a zero factor; callers that want an empty cell
/// instead check [`RepeatFactor::is_degenerate`] first.
#[instrument(skip_all, name = "repeat_workflow")]
pub fn run(
    atoms: &[Atom],
    factor: RepeatFactor,
    config: &TransformConfig,
    reporter: &ProgressReporter,
) -> Result<TransformResult, CellError> {
    let factors = factor.factors();
    info!(?factors, atoms = atoms.len(), "Repeating unit cell.");

    let repeated = reporter.stage("Repeat", atoms.len(), || {
        repeat_atoms_in_unit_cell(atoms, factors)
    })?;

    let warnings: Vec<_> = collision_warning(&repeated, config.collision_threshold)?
        .into_iter()
        .collect();
    surface_warnings(&warnings, reporter);

    info!(atoms = repeated.len(), "Repeat finished.");
    Ok(TransformResult {
        atoms: repeated,
        cell_scaling: factors.map(f64::from),
        warnings,
    })
}
