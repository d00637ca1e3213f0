use crate::align::{Superposition, superpose};
use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::selection::{AtomSelection, extract_points};
use crate::interactions::compare::{ComparisonResult, compare};
use crate::interactions::contact_map::{ContactMapError, parse_contact_map_path};
use crate::interactions::profile::{DEFAULT_HOT_SPOT_MIN, InteractionProfile, profile};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Structure-side failures (unreadable PDB, failed superposition) never reach
/// this enum: they degrade the affected alignment outcomes and the run
/// continues to the interaction pipeline.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Contact map parsing failed: {source}")]
    ContactMap {
        #[from]
        source: ContactMapError,
    },
}

/// Inputs of one validation run.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Predicted (model) structure file.
    pub predicted_structure: PathBuf,
    /// Experimental (reference) structure file.
    pub experimental_structure: PathBuf,
    /// Contact map computed on the predicted structure.
    pub predicted_contacts: PathBuf,
    /// Contact map computed on the experimental structure.
    pub experimental_contacts: PathBuf,
    /// Minimum participation count for hot-spot classification.
    pub hot_spot_min: usize,
}

impl ValidationConfig {
    pub fn new(
        predicted_structure: impl Into<PathBuf>,
        experimental_structure: impl Into<PathBuf>,
        predicted_contacts: impl Into<PathBuf>,
        experimental_contacts: impl Into<PathBuf>,
    ) -> Self {
        Self {
            predicted_structure: predicted_structure.into(),
            experimental_structure: experimental_structure.into(),
            predicted_contacts: predicted_contacts.into(),
            experimental_contacts: experimental_contacts.into(),
            hot_spot_min: DEFAULT_HOT_SPOT_MIN,
        }
    }
}

/// Outcome of one structural alignment under one selection policy, in the
/// shape the report assembler consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentOutcome {
    pub atom_type: AtomSelection,
    pub rmsd: f64,
    pub n_atoms: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AlignmentOutcome {
    fn from_superposition(selection: AtomSelection, superposition: &Superposition) -> Self {
        Self {
            atom_type: selection,
            rmsd: superposition.rmsd,
            n_atoms: superposition.n_atoms,
            error: superposition.error.clone(),
        }
    }

    fn failed(selection: AtomSelection, reason: String) -> Self {
        Self {
            atom_type: selection,
            rmsd: 0.0,
            n_atoms: 0,
            error: Some(reason),
        }
    }
}

/// Qualitative band for a CA-RMSD value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StructureGrade {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl StructureGrade {
    pub fn from_rmsd(rmsd: f64) -> Self {
        if rmsd < 1.0 {
            Self::Excellent
        } else if rmsd < 2.0 {
            Self::Good
        } else if rmsd < 3.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for StructureGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Poor => "POOR",
        };
        f.write_str(label)
    }
}

/// Qualitative band for an interaction-agreement F1 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgreementGrade {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl AgreementGrade {
    pub fn from_f1(f1: f64) -> Self {
        if f1 > 0.8 {
            Self::Excellent
        } else if f1 > 0.6 {
            Self::Good
        } else if f1 > 0.4 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for AgreementGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Poor => "POOR",
        };
        f.write_str(label)
    }
}

/// Everything one validation run produces, handed to the report writers.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub alignments: Vec<AlignmentOutcome>,
    pub comparison: ComparisonResult,
    pub predicted_profile: InteractionProfile,
    pub experimental_profile: InteractionProfile,
    pub hot_spot_min: usize,
}

impl ValidationReport {
    pub fn alignment(&self, selection: AtomSelection) -> Option<&AlignmentOutcome> {
        self.alignments.iter().find(|a| a.atom_type == selection)
    }

    /// Structure grade derived from the CA-only alignment, if one succeeded.
    pub fn structure_grade(&self) -> Option<StructureGrade> {
        self.alignment(AtomSelection::CaOnly)
            .filter(|a| a.error.is_none())
            .map(|a| StructureGrade::from_rmsd(a.rmsd))
    }

    pub fn agreement_grade(&self) -> AgreementGrade {
        AgreementGrade::from_f1(self.comparison.overall.f1_score)
    }
}

const SELECTIONS: [AtomSelection; 2] = [AtomSelection::CaOnly, AtomSelection::AllAtom];

/// Runs the structural-alignment pipeline. Parse and superposition failures
/// degrade the affected outcomes (`error` set, zero atoms) rather than
/// propagating, so a broken structure file cannot take the interaction
/// pipeline down with it.
fn align_structures(config: &ValidationConfig) -> Vec<AlignmentOutcome> {
    let structures = PdbFile::read_from_path(&config.predicted_structure).and_then(|predicted| {
        PdbFile::read_from_path(&config.experimental_structure)
            .map(|experimental| (predicted, experimental))
    });
    let (predicted, experimental) = match structures {
        Ok(pair) => pair,
        Err(e) => {
            warn!(error = %e, "Structure parsing failed; alignment degraded.");
            return SELECTIONS
                .into_iter()
                .map(|selection| AlignmentOutcome::failed(selection, e.to_string()))
                .collect();
        }
    };

    SELECTIONS
        .into_iter()
        .map(|selection| {
            let predicted_points = extract_points(&predicted, selection);
            let experimental_points = extract_points(&experimental, selection);
            match superpose(&predicted_points, &experimental_points) {
                Ok(superposition) => {
                    info!(
                        selection = %selection,
                        rmsd = superposition.rmsd,
                        n_atoms = superposition.n_atoms,
                        "Alignment computed."
                    );
                    AlignmentOutcome::from_superposition(selection, &superposition)
                }
                Err(e) => {
                    warn!(selection = %selection, error = %e, "Superposition failed; alignment degraded.");
                    AlignmentOutcome::failed(selection, e.to_string())
                }
            }
        })
        .collect()
}

/// Runs the full validation: structural alignment under both selection
/// policies, then interaction comparison and profiling.
///
/// The two pipelines are independent; a structure-side failure degrades the
/// alignment outcomes while the interaction comparison still runs. Only a
/// fatal contact-map error aborts, since without interaction sets there is
/// nothing left to report.
#[instrument(skip_all, name = "validation_workflow")]
pub fn run(config: &ValidationConfig) -> Result<ValidationReport, ValidationError> {
    info!(
        predicted = %config.predicted_structure.display(),
        experimental = %config.experimental_structure.display(),
        "Starting structure validation."
    );

    let alignments = align_structures(config);

    let predicted_interactions = parse_contact_map_path(&config.predicted_contacts)?;
    let experimental_interactions = parse_contact_map_path(&config.experimental_contacts)?;
    info!(
        predicted = predicted_interactions.len(),
        experimental = experimental_interactions.len(),
        "Contact maps parsed."
    );

    let comparison = compare(&predicted_interactions, &experimental_interactions);
    info!(
        precision = comparison.overall.precision,
        recall = comparison.overall.recall,
        f1 = comparison.overall.f1_score,
        "Interaction comparison complete."
    );

    Ok(ValidationReport {
        alignments,
        comparison,
        predicted_profile: profile(&predicted_interactions),
        experimental_profile: profile(&experimental_interactions),
        hot_spot_min: config.hot_spot_min,
    })
}
