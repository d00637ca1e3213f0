use crate::core::models::StructureModel;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Atom-selection policy for point extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomSelection {
    /// One point per residue: its alpha carbon. Residues without a CA atom are
    /// skipped entirely.
    CaOnly,
    /// Every atom of every included residue, in atom-record order.
    AllAtom,
}

impl fmt::Display for AtomSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomSelection::CaOnly => f.write_str("CA"),
            AtomSelection::AllAtom => f.write_str("all"),
        }
    }
}

/// Extracts an ordered point set from a structure under a selection policy.
///
/// Traversal order is fixed: models in file order, chains in file order,
/// residues in file order, atoms in file order. Only standard amino-acid
/// residues contribute. The returned points hold no back-reference to the
/// structure; correspondence between two extractions is purely positional.
pub fn extract_points(model: &StructureModel, selection: AtomSelection) -> Vec<Point3<f64>> {
    let mut points = Vec::new();
    for chain in model.chains() {
        for residue in chain.residues() {
            if !residue.is_standard_amino_acid() {
                continue;
            }
            match selection {
                AtomSelection::CaOnly => {
                    if let Some(ca) = residue.ca() {
                        points.push(ca.position);
                    }
                }
                AtomSelection::AllAtom => {
                    points.extend(residue.atoms().iter().map(|a| a.position));
                }
            }
        }
    }
    points
}
