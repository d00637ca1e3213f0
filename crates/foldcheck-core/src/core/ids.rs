use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identity of a residue without structural geometry.
///
/// Rendered as `chain:resnameresnum` (e.g. `A:ALA10`), the key format shared by
/// structure-derived residues and contact-map atom paths. The residue number
/// keeps any insertion-code suffix verbatim (`A:SER100A`), so the two sources
/// agree on identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidueId(String);

impl ResidueId {
    /// Builds the canonical key from its three components.
    ///
    /// `res_num` is taken as a string so that insertion-code suffixes survive
    /// unchanged (contact maps carry the number in string form already).
    pub fn new(chain: &str, res_name: &str, res_num: &str) -> Self {
        Self(format!("{}:{}{}", chain, res_name, res_num))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Chain component of the key.
    pub fn chain(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(c, _)| c)
    }

    /// Residue component of the key (`resnameresnum`).
    pub fn residue(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, r)| r)
    }

    /// Orders a residue pair lexicographically, canonicalizing direction.
    ///
    /// Contact records are directional at the atom level; at the residue level
    /// an interaction is an unordered pair, so both directions must map to the
    /// same tuple.
    pub fn sorted_pair(a: ResidueId, b: ResidueId) -> (ResidueId, ResidueId) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_renders_canonical_key() {
        let id = ResidueId::new("A", "ALA", "10");
        assert_eq!(id.as_str(), "A:ALA10");
        assert_eq!(id.to_string(), "A:ALA10");
    }

    #[test]
    fn components_round_trip() {
        let id = ResidueId::new("A", "ALA", "10");
        assert_eq!(id.chain(), "A");
        assert_eq!(id.residue(), "ALA10");
    }

    #[test]
    fn insertion_code_suffix_is_kept_verbatim() {
        let id = ResidueId::new("B", "SER", "100A");
        assert_eq!(id.as_str(), "B:SER100A");
    }

    #[test]
    fn sorted_pair_canonicalizes_direction() {
        let a = ResidueId::new("A", "ALA", "10");
        let b = ResidueId::new("B", "GLY", "20");
        assert_eq!(
            ResidueId::sorted_pair(b.clone(), a.clone()),
            (a.clone(), b.clone())
        );
        assert_eq!(ResidueId::sorted_pair(a.clone(), b.clone()), (a, b));
    }

    #[test]
    fn sorted_pair_of_equal_ids_is_stable() {
        let a = ResidueId::new("A", "ALA", "10");
        let pair = ResidueId::sorted_pair(a.clone(), a.clone());
        assert_eq!(pair.0, pair.1);
    }
}
