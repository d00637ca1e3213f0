use super::record::{Interaction, InteractionKey};
use crate::core::ids::ResidueId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Default minimum participation count for hot-spot classification.
pub const DEFAULT_HOT_SPOT_MIN: usize = 3;

/// Distance statistics over the strictly positive contact distances.
///
/// Zero distances mean "absent upstream" and are excluded; all fields are 0.0
/// when no real distance was recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Summary of one interface's interaction records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionProfile {
    /// Number of raw interaction records (atom-level duplicates included).
    pub total_interactions: usize,
    /// Record counts per interaction type.
    pub type_counts: BTreeMap<String, usize>,
    /// Number of distinct (sorted residue pair, type) triples.
    pub unique_residue_pairs: usize,
    /// How many records each residue participates in (either side counts).
    pub residue_counts: BTreeMap<ResidueId, usize>,
    pub distance_stats: DistanceStats,
}

impl InteractionProfile {
    /// Residues participating in at least `min_interactions` records, sorted
    /// descending by count, ties broken by residue id for reproducibility.
    pub fn hot_spots(&self, min_interactions: usize) -> Vec<(&ResidueId, usize)> {
        let mut spots: Vec<(&ResidueId, usize)> = self
            .residue_counts
            .iter()
            .filter(|(_, &count)| count >= min_interactions)
            .map(|(id, &count)| (id, count))
            .collect();
        spots.sort_by(|(id_a, count_a), (id_b, count_b)| {
            count_b.cmp(count_a).then(id_a.cmp(id_b))
        });
        spots
    }

    /// Type counts in reporting order: descending by count, ties by name.
    pub fn ranked_type_counts(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .type_counts
            .iter()
            .map(|(kind, &count)| (kind.as_str(), count))
            .collect();
        ranked.sort_by(|(name_a, a), (name_b, b)| b.cmp(a).then(name_a.cmp(name_b)));
        ranked
    }
}

/// Profiles a collection of interaction records: counts by type, unique pairs,
/// per-residue participation, and distance statistics.
pub fn profile(interactions: &[Interaction]) -> InteractionProfile {
    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut residue_counts: BTreeMap<ResidueId, usize> = BTreeMap::new();
    let mut unique_pairs: BTreeSet<InteractionKey> = BTreeSet::new();
    let mut distances: Vec<f64> = Vec::new();

    for interaction in interactions {
        *type_counts.entry(interaction.kind.clone()).or_insert(0) += 1;
        *residue_counts
            .entry(interaction.pair.0.clone())
            .or_insert(0) += 1;
        *residue_counts
            .entry(interaction.pair.1.clone())
            .or_insert(0) += 1;
        unique_pairs.insert(interaction.key());
        if interaction.distance > 0.0 {
            distances.push(interaction.distance);
        }
    }

    let distance_stats = if distances.is_empty() {
        DistanceStats {
            mean: 0.0,
            min: 0.0,
            max: 0.0,
        }
    } else {
        let sum: f64 = distances.iter().sum();
        DistanceStats {
            mean: sum / distances.len() as f64,
            min: distances.iter().cloned().fold(f64::INFINITY, f64::min),
            max: distances.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        }
    };

    InteractionProfile {
        total_interactions: interactions.len(),
        type_counts,
        unique_residue_pairs: unique_pairs.len(),
        residue_counts,
        distance_stats,
    }
}
