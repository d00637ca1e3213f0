use super::record::{Interaction, InteractionSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// Overall agreement between a predicted and an experimental interaction set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallMetrics {
    pub predicted_total: usize,
    pub experimental_total: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Agreement metrics restricted to a single interaction type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeMetrics {
    pub predicted: usize,
    pub experimental: usize,
    pub tp: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Result of one interaction comparison. Immutable; consumed by the report
/// assembler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub overall: OverallMetrics,
    pub by_type: BTreeMap<String, TypeMetrics>,
}

impl ComparisonResult {
    /// Per-type metrics in reporting order: descending by predicted count,
    /// ties broken by ascending type name.
    pub fn ranked_types(&self) -> Vec<(&str, &TypeMetrics)> {
        let mut ranked: Vec<(&str, &TypeMetrics)> = self
            .by_type
            .iter()
            .map(|(kind, metrics)| (kind.as_str(), metrics))
            .collect();
        ranked.sort_by(|(name_a, a), (name_b, b)| {
            b.predicted.cmp(&a.predicted).then(name_a.cmp(name_b))
        });
        ranked
    }
}

fn precision_recall_f1(tp: usize, predicted: usize, experimental: usize) -> (f64, f64, f64) {
    let precision = if predicted > 0 {
        tp as f64 / predicted as f64
    } else {
        0.0
    };
    let recall = if experimental > 0 {
        tp as f64 / experimental as f64
    } else {
        0.0
    };
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    (precision, recall, f1)
}

/// Compares predicted against experimental interactions.
///
/// Both collections are set-ified on (sorted residue pair, type); atom-level
/// duplicates collapse here. Per-type metrics are computed independently on the
/// type-restricted subsets; because the type is part of every key's identity,
/// summing per-type tp/fp/fn over all types reproduces the overall counts.
pub fn compare(predicted: &[Interaction], experimental: &[Interaction]) -> ComparisonResult {
    let predicted_set = InteractionSet::from_interactions(predicted);
    let experimental_set = InteractionSet::from_interactions(experimental);

    let tp = predicted_set.intersection_len(&experimental_set);
    let fp = predicted_set.difference_len(&experimental_set);
    let fn_ = experimental_set.difference_len(&predicted_set);
    let (precision, recall, f1_score) =
        precision_recall_f1(tp, predicted_set.len(), experimental_set.len());

    let overall = OverallMetrics {
        predicted_total: predicted_set.len(),
        experimental_total: experimental_set.len(),
        true_positives: tp,
        false_positives: fp,
        false_negatives: fn_,
        precision,
        recall,
        f1_score,
    };

    let mut kinds = predicted_set.kinds();
    kinds.extend(experimental_set.kinds());

    let mut by_type = BTreeMap::new();
    for kind in kinds {
        let pred_kind = predicted_set.restrict_to_kind(&kind);
        let exp_kind = experimental_set.restrict_to_kind(&kind);
        let tp = pred_kind.intersection_len(&exp_kind);
        let fp = pred_kind.difference_len(&exp_kind);
        let fn_ = exp_kind.difference_len(&pred_kind);
        let (precision, recall, f1) = precision_recall_f1(tp, pred_kind.len(), exp_kind.len());
        by_type.insert(
            kind,
            TypeMetrics {
                predicted: pred_kind.len(),
                experimental: exp_kind.len(),
                tp,
                fp,
                fn_,
                precision,
                recall,
                f1,
            },
        );
    }

    ComparisonResult { overall, by_type }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::ResidueId;

    const TOLERANCE: f64 = 1e-3;

    fn interaction(chain_a: &str, num_a: &str, chain_b: &str, num_b: &str, kind: &str) -> Interaction {
        Interaction::new(
            ResidueId::new(chain_a, "ALA", num_a),
            ResidueId::new(chain_b, "GLY", num_b),
            kind,
            3.0,
        )
    }

    #[test]
    fn identical_nonempty_sets_score_perfectly() {
        let interactions = vec![
            interaction("A", "10", "B", "20", "hbond"),
            interaction("A", "11", "B", "21", "vdw"),
        ];
        let result = compare(&interactions, &interactions);
        assert_eq!(result.overall.true_positives, 2);
        assert_eq!(result.overall.false_positives, 0);
        assert_eq!(result.overall.false_negatives, 0);
        assert_eq!(result.overall.precision, 1.0);
        assert_eq!(result.overall.recall, 1.0);
        assert_eq!(result.overall.f1_score, 1.0);
    }

    #[test]
    fn partial_overlap_scenario_matches_documented_metrics() {
        let predicted = vec![interaction("A", "10", "B", "20", "hbond")];
        let experimental = vec![
            interaction("A", "10", "B", "20", "hbond"),
            interaction("A", "11", "B", "21", "vdw"),
        ];
        let result = compare(&predicted, &experimental);
        assert_eq!(result.overall.true_positives, 1);
        assert_eq!(result.overall.false_positives, 0);
        assert_eq!(result.overall.false_negatives, 1);
        assert!((result.overall.precision - 1.0).abs() < TOLERANCE);
        assert!((result.overall.recall - 0.5).abs() < TOLERANCE);
        assert!((result.overall.f1_score - 0.667).abs() < TOLERANCE);
    }

    #[test]
    fn disjoint_nonempty_sets_score_zero() {
        let predicted = vec![interaction("A", "10", "B", "20", "hbond")];
        let experimental = vec![interaction("A", "30", "B", "40", "hbond")];
        let result = compare(&predicted, &experimental);
        assert_eq!(result.overall.precision, 0.0);
        assert_eq!(result.overall.recall, 0.0);
        assert_eq!(result.overall.f1_score, 0.0);
    }

    #[test]
    fn empty_sets_default_to_zero_metrics_without_failing() {
        let result = compare(&[], &[]);
        assert_eq!(result.overall.predicted_total, 0);
        assert_eq!(result.overall.experimental_total, 0);
        assert_eq!(result.overall.precision, 0.0);
        assert_eq!(result.overall.recall, 0.0);
        assert_eq!(result.overall.f1_score, 0.0);
        assert!(result.by_type.is_empty());
    }

    #[test]
    fn duplicate_records_collapse_before_scoring() {
        let predicted = vec![
            interaction("A", "10", "B", "20", "hbond"),
            interaction("A", "10", "B", "20", "hbond"),
        ];
        let experimental = vec![interaction("A", "10", "B", "20", "hbond")];
        let result = compare(&predicted, &experimental);
        assert_eq!(result.overall.predicted_total, 1);
        assert_eq!(result.overall.precision, 1.0);
    }

    #[test]
    fn same_pair_with_different_type_is_not_a_match() {
        let predicted = vec![interaction("A", "10", "B", "20", "hbond")];
        let experimental = vec![interaction("A", "10", "B", "20", "vdw")];
        let result = compare(&predicted, &experimental);
        assert_eq!(result.overall.true_positives, 0);
        assert_eq!(result.overall.false_positives, 1);
        assert_eq!(result.overall.false_negatives, 1);
    }

    #[test]
    fn per_type_counts_sum_to_overall_counts() {
        let predicted = vec![
            interaction("A", "10", "B", "20", "hbond"),
            interaction("A", "11", "B", "21", "hbond"),
            interaction("A", "12", "B", "22", "vdw"),
            interaction("A", "13", "B", "23", "ionic"),
        ];
        let experimental = vec![
            interaction("A", "10", "B", "20", "hbond"),
            interaction("A", "12", "B", "22", "vdw"),
            interaction("A", "14", "B", "24", "vdw"),
            interaction("A", "15", "B", "25", "aromatic"),
        ];
        let result = compare(&predicted, &experimental);

        let tp_sum: usize = result.by_type.values().map(|m| m.tp).sum();
        let fp_sum: usize = result.by_type.values().map(|m| m.fp).sum();
        let fn_sum: usize = result.by_type.values().map(|m| m.fn_).sum();
        assert_eq!(tp_sum, result.overall.true_positives);
        assert_eq!(fp_sum, result.overall.false_positives);
        assert_eq!(fn_sum, result.overall.false_negatives);
    }

    #[test]
    fn by_type_covers_types_from_either_side() {
        let predicted = vec![interaction("A", "10", "B", "20", "hbond")];
        let experimental = vec![interaction("A", "11", "B", "21", "vdw")];
        let result = compare(&predicted, &experimental);
        assert!(result.by_type.contains_key("hbond"));
        assert!(result.by_type.contains_key("vdw"));
        assert_eq!(result.by_type["vdw"].predicted, 0);
        assert_eq!(result.by_type["vdw"].experimental, 1);
    }

    #[test]
    fn ranked_types_sort_by_predicted_desc_then_name_asc() {
        let predicted = vec![
            interaction("A", "10", "B", "20", "vdw"),
            interaction("A", "11", "B", "21", "vdw"),
            interaction("A", "12", "B", "22", "hbond"),
            interaction("A", "13", "B", "23", "aromatic"),
        ];
        let result = compare(&predicted, &[]);
        let order: Vec<&str> = result.ranked_types().iter().map(|(kind, _)| *kind).collect();
        assert_eq!(order, vec!["vdw", "aromatic", "hbond"]);
    }
}
