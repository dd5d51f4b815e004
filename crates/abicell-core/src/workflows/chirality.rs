use super::{TransformResult, collision_warning, surface_warnings};
use crate::core::models::atom::Atom;
use crate::core::models::lattice::LatticeBasis;
use crate::engine::config::TransformConfig;
use crate::engine::error::CellError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks::chirality::{Chirality, build_chiral_cell};
use tracing::{info, instrument};

/// Builds the chiral cell for `chirality` (`[p, q]` or `[p, q, 0]`) and checks it.
///
/// Without a basis the lattice is taken as orthonormal. The result carries a count
/// mismatch warning when the cell does not hold `N · |V|² / |a1|²` atoms, and a collision
/// warning when any two atoms sit closer than the configured threshold.
#[instrument(skip_all, name = "chirality_workflow")]
pub fn run(
    atoms: &[Atom],
    chirality: &[i64],
    basis: Option<&LatticeBasis>,
    config: &TransformConfig,
    reporter: &ProgressReporter,
) -> Result<TransformResult, CellError> {
    let chirality = Chirality::from_components(chirality)?;
    let basis = basis.copied().unwrap_or_default();
    info!(%chirality, atoms = atoms.len(), "Generating chiral cell.");

    let cell = reporter.stage("Chiral cell", atoms.len(), || {
        build_chiral_cell(atoms, chirality, &basis, config)
    })?;

    let mut warnings = Vec::new();
    warnings.extend(cell.count_mismatch());
    warnings.extend(collision_warning(&cell.atoms, config.collision_threshold)?);
    surface_warnings(&warnings, reporter);

    info!(
        atoms = cell.atoms.len(),
        warnings = warnings.len(),
        "Chiral cell finished."
    );
    Ok(TransformResult {
        atoms: cell.atoms,
        cell_scaling: cell.cell_scaling,
        warnings,
    })
}
