use crate::core::ids::ResidueId;
use serde::Serialize;
use std::collections::BTreeSet;

/// A residue-level interaction canonicalized from an atom-level contact record.
///
/// The residue pair is always stored lexicographically sorted, so the two
/// directions of the same atom contact collapse to one record. The distance is
/// descriptive only; it is never part of set identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    /// Lexicographically sorted residue pair.
    pub pair: (ResidueId, ResidueId),
    /// Interaction type tag (e.g. "hbond", "vdw"), `"unknown"` when the
    /// upstream record omitted it.
    pub kind: String,
    /// Contact distance in Angstroms, `0.0` when absent upstream.
    pub distance: f64,
}

impl Interaction {
    pub fn new(a: ResidueId, b: ResidueId, kind: &str, distance: f64) -> Self {
        Self {
            pair: ResidueId::sorted_pair(a, b),
            kind: kind.to_string(),
            distance,
        }
    }

    /// The identity of this interaction for set purposes: (sorted pair, type).
    pub fn key(&self) -> InteractionKey {
        InteractionKey {
            pair: self.pair.clone(),
            kind: self.kind.clone(),
        }
    }
}

/// Set identity of an interaction: sorted residue pair plus type tag.
///
/// Two records with identical keys are duplicates even if their distances
/// differ.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct InteractionKey {
    pub pair: (ResidueId, ResidueId),
    pub kind: String,
}

/// Deduplicated set of interaction keys.
///
/// Multiple atom-level contacts between the same residue pair of the same type
/// collapse to one member; iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionSet(BTreeSet<InteractionKey>);

impl InteractionSet {
    pub fn from_interactions(interactions: &[Interaction]) -> Self {
        Self(interactions.iter().map(Interaction::key).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &InteractionKey) -> bool {
        self.0.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionKey> {
        self.0.iter()
    }

    /// Number of keys present in both sets.
    pub fn intersection_len(&self, other: &InteractionSet) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Number of keys present in `self` but not in `other`.
    pub fn difference_len(&self, other: &InteractionSet) -> usize {
        self.0.difference(&other.0).count()
    }

    /// Restricts the set to keys of the given interaction type.
    pub fn restrict_to_kind(&self, kind: &str) -> InteractionSet {
        Self(self.0.iter().filter(|k| k.kind == kind).cloned().collect())
    }

    /// All interaction types appearing in the set, deduplicated.
    pub fn kinds(&self) -> BTreeSet<String> {
        self.0.iter().map(|k| k.kind.clone()).collect()
    }
}
