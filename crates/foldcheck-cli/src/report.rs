//! Plain-text and CSV renderings of core results.
//!
//! The text layout is fixed-width and deliberately stable so that reports can
//! be diffed across runs.

use crate::error::Result;
use foldcheck::core::selection::AtomSelection;
use foldcheck::interactions::profile::InteractionProfile;
use foldcheck::interactions::record::Interaction;
use foldcheck::workflows::validate::{
    AgreementGrade, AlignmentOutcome, StructureGrade, ValidationReport,
};
use std::io::Write;
use std::path::Path;

const RULE: &str = "======================================================================";
const THIN_RULE: &str = "----------------------------------------------------------------------";

fn structure_band(grade: StructureGrade) -> &'static str {
    match grade {
        StructureGrade::Excellent => "★★★★★ EXCELLENT (RMSD < 1.0 Å)",
        StructureGrade::Good => "★★★★☆ GOOD (RMSD < 2.0 Å)",
        StructureGrade::Moderate => "★★★☆☆ MODERATE (RMSD < 3.0 Å)",
        StructureGrade::Poor => "★★☆☆☆ POOR (RMSD > 3.0 Å)",
    }
}

fn agreement_band(grade: AgreementGrade) -> &'static str {
    match grade {
        AgreementGrade::Excellent => "★★★★★ EXCELLENT agreement (F1 > 0.8)",
        AgreementGrade::Good => "★★★★☆ GOOD agreement (F1 > 0.6)",
        AgreementGrade::Moderate => "★★★☆☆ MODERATE agreement (F1 > 0.4)",
        AgreementGrade::Poor => "★★☆☆☆ POOR agreement (F1 < 0.4)",
    }
}

fn write_alignment_line(
    w: &mut impl Write,
    label: &str,
    outcome: Option<&AlignmentOutcome>,
) -> std::io::Result<()> {
    match outcome {
        Some(a) if a.error.is_none() => {
            writeln!(w, "{} {:6.3} Å ({} atoms)", label, a.rmsd, a.n_atoms)
        }
        Some(a) => writeln!(
            w,
            "{} unavailable ({})",
            label,
            a.error.as_deref().unwrap_or("unknown")
        ),
        None => writeln!(w, "{} not computed", label),
    }
}

/// Writes the full validation report in the fixed plain-text layout.
pub fn write_validation_report(w: &mut impl Write, report: &ValidationReport) -> Result<()> {
    writeln!(w, "{}", RULE)?;
    writeln!(w, "STRUCTURE PREDICTION VALIDATION REPORT")?;
    writeln!(w, "{}", RULE)?;
    writeln!(w)?;

    writeln!(w, "STRUCTURAL ALIGNMENT")?;
    writeln!(w, "{}", THIN_RULE)?;
    write_alignment_line(
        w,
        "C-alpha RMSD: ",
        report.alignment(AtomSelection::CaOnly),
    )?;
    write_alignment_line(
        w,
        "All-atom RMSD:",
        report.alignment(AtomSelection::AllAtom),
    )?;
    writeln!(w)?;
    if let Some(grade) = report.structure_grade() {
        writeln!(w, "Quality: {}", structure_band(grade))?;
        writeln!(w)?;
    }

    writeln!(w, "{}", RULE)?;
    writeln!(w, "INTERACTION COMPARISON")?;
    writeln!(w, "{}", THIN_RULE)?;
    let overall = &report.comparison.overall;
    writeln!(w, "Predicted interactions:    {}", overall.predicted_total)?;
    writeln!(
        w,
        "Experimental interactions: {}",
        overall.experimental_total
    )?;
    writeln!(w, "Overlap (TP):             {}", overall.true_positives)?;
    writeln!(w, "False Positives:          {}", overall.false_positives)?;
    writeln!(w, "False Negatives:          {}", overall.false_negatives)?;
    writeln!(w)?;
    writeln!(w, "Precision: {:6.3}", overall.precision)?;
    writeln!(w, "Recall:    {:6.3}", overall.recall)?;
    writeln!(w, "F1-score:  {:6.3}", overall.f1_score)?;
    writeln!(w)?;
    writeln!(w, "Quality: {}", agreement_band(report.agreement_grade()))?;
    writeln!(w)?;

    writeln!(w, "{}", RULE)?;
    writeln!(w, "INTERACTION COMPARISON BY TYPE")?;
    writeln!(w, "{}", THIN_RULE)?;
    writeln!(
        w,
        "{:<15} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "Type", "Pred", "Exp", "Match", "Prec", "Rec", "F1"
    )?;
    writeln!(w, "{}", THIN_RULE)?;
    for (kind, metrics) in report.comparison.ranked_types() {
        writeln!(
            w,
            "{:<15} {:>6} {:>6} {:>6} {:>6.3} {:>6.3} {:>6.3}",
            kind,
            metrics.predicted,
            metrics.experimental,
            metrics.tp,
            metrics.precision,
            metrics.recall,
            metrics.f1
        )?;
    }
    writeln!(w)?;
    writeln!(w, "{}", RULE)?;
    Ok(())
}

/// Writes the single-interface analysis report.
pub fn write_analysis_report(
    w: &mut impl Write,
    profile: &InteractionProfile,
    hot_spot_min: usize,
) -> Result<()> {
    writeln!(w, "{}", RULE)?;
    writeln!(w, "INTERFACE INTERACTION ANALYSIS REPORT")?;
    writeln!(w, "{}", RULE)?;
    writeln!(w)?;
    writeln!(w, "Total interactions: {}", profile.total_interactions)?;
    writeln!(w, "Unique residue pairs: {}", profile.unique_residue_pairs)?;
    writeln!(w)?;

    writeln!(w, "INTERACTIONS BY TYPE")?;
    writeln!(w, "{}", THIN_RULE)?;
    for (kind, count) in profile.ranked_type_counts() {
        writeln!(w, "  {:<20} : {:>5}", kind, count)?;
    }
    writeln!(w)?;

    writeln!(w, "HOT SPOT RESIDUES (>= {} interactions)", hot_spot_min)?;
    writeln!(w, "{}", THIN_RULE)?;
    let spots = profile.hot_spots(hot_spot_min);
    if spots.is_empty() {
        writeln!(w, "  (none)")?;
    }
    for (residue, count) in spots {
        writeln!(w, "  {:<15} : {:>5}", residue.as_str(), count)?;
    }
    writeln!(w)?;

    writeln!(w, "DISTANCE STATISTICS")?;
    writeln!(w, "{}", THIN_RULE)?;
    writeln!(w, "  Mean:    {:.2} Å", profile.distance_stats.mean)?;
    writeln!(w, "  Min:     {:.2} Å", profile.distance_stats.min)?;
    writeln!(w, "  Max:     {:.2} Å", profile.distance_stats.max)?;
    writeln!(w)?;
    writeln!(w, "{}", RULE)?;
    Ok(())
}

/// Exports the per-type agreement metrics as CSV, in ranked order.
pub fn export_type_metrics_csv(path: &Path, report: &ValidationReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Type",
        "Predicted",
        "Experimental",
        "Match",
        "Precision",
        "Recall",
        "F1",
    ])?;
    for (kind, metrics) in report.comparison.ranked_types() {
        let row = [
            kind.to_string(),
            metrics.predicted.to_string(),
            metrics.experimental.to_string(),
            metrics.tp.to_string(),
            format!("{:.3}", metrics.precision),
            format!("{:.3}", metrics.recall),
            format!("{:.3}", metrics.f1),
        ];
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Exports residue-level interaction records as CSV.
pub fn export_csv(path: &Path, interactions: &[Interaction]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Chain1", "Residue1", "Chain2", "Residue2", "Type", "Distance"])?;
    for interaction in interactions {
        let distance = format!("{:.2}", interaction.distance);
        writer.write_record([
            interaction.pair.0.chain(),
            interaction.pair.0.residue(),
            interaction.pair.1.chain(),
            interaction.pair.1.residue(),
            interaction.kind.as_str(),
            distance.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
