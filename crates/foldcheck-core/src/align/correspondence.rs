use nalgebra::Point3;

/// Strategy deciding which predicted point corresponds to which experimental
/// point before superposition.
///
/// The baseline contract is positional: index i corresponds to index i, with
/// both sequences truncated to the shorter length. That assumption is fragile
/// when the two structures differ in chain or residue count, so the step is a
/// seam: a residue-identity-based matcher can replace it without touching the
/// superposition engine.
pub trait Correspondence {
    /// Returns the matched prefix pair `(predicted, experimental)` of equal
    /// length (possibly zero).
    fn pair<'a>(
        &self,
        predicted: &'a [Point3<f64>],
        experimental: &'a [Point3<f64>],
    ) -> (&'a [Point3<f64>], &'a [Point3<f64>]);
}

/// Positional correspondence: truncate both sequences to
/// `min(|predicted|, |experimental|)` and pair by index.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalTruncation;

impl Correspondence for PositionalTruncation {
    fn pair<'a>(
        &self,
        predicted: &'a [Point3<f64>],
        experimental: &'a [Point3<f64>],
    ) -> (&'a [Point3<f64>], &'a [Point3<f64>]) {
        let n = predicted.len().min(experimental.len());
        (&predicted[..n], &experimental[..n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<Point3<f64>> {
        (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn truncates_the_longer_sequence() {
        let pred = points(5);
        let exp = points(3);
        let (p, q) = PositionalTruncation.pair(&pred, &exp);
        assert_eq!(p.len(), 3);
        assert_eq!(q.len(), 3);
        // Prefix of each sequence, not any identity-aware matching. The
        // truncation silently discards the predicted tail, which is a known
        // correctness risk when the inputs enumerate residues differently.
        assert_eq!(p[2], Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn equal_lengths_pass_through() {
        let pred = points(4);
        let exp = points(4);
        let (p, q) = PositionalTruncation.pair(&pred, &exp);
        assert_eq!(p.len(), 4);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn empty_input_pairs_to_empty() {
        let pred = points(0);
        let exp = points(10);
        let (p, q) = PositionalTruncation.pair(&pred, &exp);
        assert!(p.is_empty());
        assert!(q.is_empty());
    }
}
