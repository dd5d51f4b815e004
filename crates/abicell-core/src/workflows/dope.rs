use crate::core::models::atom::Atom;
use crate::engine::error::CellError;
use crate::engine::progress::ProgressReporter;
use crate::engine::tasks::doping::dope_atoms;
use tracing::{info, instrument, warn};

/// Applies every dopant to the cell.
///
/// # Errors
///
/// [`CellError::NoMatchingAtom`] for the first dopant without a matching atom; the error
/// still carries the partially doped list.
#[instrument(skip_all, name = "dope_workflow")]
pub fn run(
    atoms: &[Atom],
    dopants: &[Atom],
    reporter: &ProgressReporter,
) -> Result<Vec<Atom>, CellError> {
    if dopants.is_empty() {
        info!("No dopants given; leaving the cell unchanged.");
        return Ok(atoms.to_vec());
    }
    info!(atoms = atoms.len(), dopants = dopants.len(), "Doping cell.");

    reporter
        .stage("Dope", atoms.len(), || dope_atoms(atoms, dopants))
        .inspect_err(|e| {
            if let CellError::NoMatchingAtom {
                partially_doped, ..
            } = e
            {
                warn!(
                    applied = changed_sites(atoms, partially_doped),
                    "Doping pattern does not match the underlying cell."
                );
            }
        })
}

fn changed_sites(before: &[Atom], after: &[Atom]) -> usize {
    before
        .iter()
        .zip(after)
        .filter(|(a, b)| a.znucl != b.znucl)
        .count()
}
