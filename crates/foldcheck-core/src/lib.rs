//! # foldcheck Core Library
//!
//! Validates predicted protein-complex structures (e.g. from structure-prediction
//! models) against experimental reference structures. Two independent pipelines
//! answer two questions:
//!
//! - **Structural agreement**: how close is the predicted atom arrangement to the
//!   experimental one after optimal rigid-body superposition (Kabsch RMSD)?
//! - **Interaction agreement**: how well do predicted inter-chain contacts match
//!   the experimentally observed ones (precision / recall / F1, overall and per
//!   interaction type)?
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless structure model (`StructureModel`),
//!   PDB reading, residue identity, and atom selection policies.
//!
//! - **[`align`]: Superposition.** Positional point correspondence and the
//!   closed-form Kabsch / orthogonal-Procrustes alignment.
//!
//! - **[`interactions`]: Contact Agreement.** Canonicalization of heterogeneous
//!   per-atom contact records into residue-level interactions, set-theoretic
//!   comparison, and interface profiling.
//!
//! - **[`workflows`]: The Public API.** Ties the pipelines together into a single
//!   validation run consumed by the report-writing shell.

pub mod align;
pub mod core;
pub mod interactions;
pub mod workflows;
