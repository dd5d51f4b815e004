//! The record shapes exchanged with external collaborators.
//!
//! Only the serde data model lives here. Rendering or reading any concrete text format
//! (ABINIT input, JSON documents, CIF, XYZ) is the collaborator's job.

pub mod records;
