use super::correspondence::{Correspondence, PositionalTruncation};
use nalgebra::{Matrix3, Point3, Rotation3, Vector3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuperpositionError {
    #[error("non-finite coordinates in input point sets")]
    NonFinite,
    #[error("singular value decomposition of the covariance matrix failed")]
    Decomposition,
}

/// Result of an optimal rigid-body superposition.
///
/// The transform maps a predicted point p onto the experimental frame as
/// `rotation * p + translation`. With fewer than three matched points the fit
/// is under-determined; the rotation returned is still proper, but callers
/// should treat such results as low-confidence.
#[derive(Debug, Clone)]
pub struct Superposition {
    /// Proper rotation (determinant +1) of the optimal fit.
    pub rotation: Rotation3<f64>,
    /// Translation component of the optimal fit.
    pub translation: Vector3<f64>,
    /// Root-mean-square deviation over the matched points after superposition.
    pub rmsd: f64,
    /// Number of matched point pairs the fit used.
    pub n_atoms: usize,
    /// Set when the result is degraded rather than computed (zero matched
    /// atoms); such results carry an identity transform and zero RMSD.
    pub error: Option<String>,
}

impl Superposition {
    fn degraded(reason: &str) -> Self {
        Self {
            rotation: Rotation3::identity(),
            translation: Vector3::zeros(),
            rmsd: 0.0,
            n_atoms: 0,
            error: Some(reason.to_string()),
        }
    }

    /// Applies the fitted transform to a point in the predicted frame.
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.rotation * point + self.translation
    }
}

/// Superposes `predicted` onto `experimental` under the baseline positional
/// correspondence (truncate both to the shorter length).
pub fn superpose(
    predicted: &[Point3<f64>],
    experimental: &[Point3<f64>],
) -> Result<Superposition, SuperpositionError> {
    superpose_with(&PositionalTruncation, predicted, experimental)
}

/// Superposes `predicted` onto `experimental` using the Kabsch / orthogonal
/// Procrustes algorithm, with point correspondence delegated to `strategy`.
///
/// Zero matched points yields a degraded result (`error` set), never an `Err`;
/// `Err` is reserved for numerical failure (non-finite input, SVD breakdown).
pub fn superpose_with(
    strategy: &impl Correspondence,
    predicted: &[Point3<f64>],
    experimental: &[Point3<f64>],
) -> Result<Superposition, SuperpositionError> {
    let (p, q) = strategy.pair(predicted, experimental);
    let n = p.len();
    debug_assert_eq!(n, q.len());
    if n == 0 {
        return Ok(Superposition::degraded("no matching atoms"));
    }
    if !all_finite(p) || !all_finite(q) {
        return Err(SuperpositionError::NonFinite);
    }

    let inv_n = 1.0 / n as f64;
    let centroid_p: Vector3<f64> = p.iter().map(|pt| pt.coords).sum::<Vector3<f64>>() * inv_n;
    let centroid_q: Vector3<f64> = q.iter().map(|pt| pt.coords).sum::<Vector3<f64>>() * inv_n;

    // Cross-covariance H = Pᵀ·Q over the zero-centered sets.
    let mut h = Matrix3::<f64>::zeros();
    for (pp, qq) in p.iter().zip(q.iter()) {
        let pc = pp.coords - centroid_p;
        let qc = qq.coords - centroid_q;
        h += pc * qc.transpose();
    }

    let svd = h.svd(true, true);
    let u = svd.u.ok_or(SuperpositionError::Decomposition)?;
    let v = svd.v_t.ok_or(SuperpositionError::Decomposition)?.transpose();

    // A negative determinant means the best orthogonal fit is a reflection;
    // flipping the last column of V restores a proper rotation.
    let mut d = Matrix3::<f64>::identity();
    if (v * u.transpose()).determinant() < 0.0 {
        d[(2, 2)] = -1.0;
    }
    let r = v * d * u.transpose();
    if r.iter().any(|x| !x.is_finite()) {
        return Err(SuperpositionError::Decomposition);
    }
    let rotation = Rotation3::from_matrix_unchecked(r);

    let squared_dist_sum: f64 = p
        .iter()
        .zip(q.iter())
        .map(|(pp, qq)| {
            let fitted = r * (pp.coords - centroid_p);
            (fitted - (qq.coords - centroid_q)).norm_squared()
        })
        .sum();
    let rmsd = (squared_dist_sum * inv_n).sqrt();

    Ok(Superposition {
        rotation,
        translation: centroid_q - r * centroid_p,
        rmsd,
        n_atoms: n,
        error: None,
    })
}

fn all_finite(points: &[Point3<f64>]) -> bool {
    points
        .iter()
        .all(|p| p.coords.iter().all(|x| x.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Unit;

    const TOLERANCE: f64 = 1e-9;

    fn helix(n: usize) -> Vec<Point3<f64>> {
        (0..n)
            .map(|i| {
                let t = i as f64 * 100.0_f64.to_radians();
                Point3::new(2.3 * t.cos(), 2.3 * t.sin(), 1.5 * i as f64)
            })
            .collect()
    }

    fn apply_rigid(
        points: &[Point3<f64>],
        rotation: &Rotation3<f64>,
        translation: &Vector3<f64>,
    ) -> Vec<Point3<f64>> {
        points.iter().map(|p| rotation * p + translation).collect()
    }

    #[test]
    fn identity_alignment_has_zero_rmsd() {
        let points = helix(20);
        let result = superpose(&points, &points).unwrap();
        assert!(result.rmsd.abs() < TOLERANCE);
        assert_eq!(result.n_atoms, 20);
        assert!(result.error.is_none());
    }

    #[test]
    fn pure_translation_aligns_to_zero_rmsd() {
        let points = helix(50);
        let shifted: Vec<_> = points
            .iter()
            .map(|p| p + Vector3::new(10.0, 0.0, 0.0))
            .collect();
        let result = superpose(&shifted, &points).unwrap();
        assert!(result.rmsd.abs() < 1e-6);
        assert_eq!(result.n_atoms, 50);
    }

    #[test]
    fn rmsd_is_invariant_under_rigid_motion_of_one_input() {
        let predicted = helix(30);
        // Perturb so the baseline RMSD is non-trivial.
        let experimental: Vec<_> = predicted
            .iter()
            .enumerate()
            .map(|(i, p)| p + Vector3::new(0.1 * (i as f64).sin(), 0.05, -0.1 * (i as f64).cos()))
            .collect();

        let baseline = superpose(&predicted, &experimental).unwrap().rmsd;

        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(Vector3::new(1.0, 2.0, 3.0)), 0.7);
        let translation = Vector3::new(-4.0, 11.0, 2.5);
        let moved = apply_rigid(&experimental, &rotation, &translation);
        let transformed = superpose(&predicted, &moved).unwrap().rmsd;

        assert!((baseline - transformed).abs() < 1e-6);
    }

    #[test]
    fn zero_matched_atoms_is_degraded_not_an_error() {
        let empty: Vec<Point3<f64>> = Vec::new();
        let points = helix(5);
        let result = superpose(&empty, &points).unwrap();
        assert_eq!(result.rmsd, 0.0);
        assert_eq!(result.n_atoms, 0);
        assert_eq!(result.error.as_deref(), Some("no matching atoms"));
    }

    #[test]
    fn mirrored_input_still_yields_a_proper_rotation() {
        let points = helix(25);
        let mirrored: Vec<_> = points
            .iter()
            .map(|p| Point3::new(-p.x, p.y, p.z))
            .collect();
        let result = superpose(&mirrored, &points).unwrap();
        let det = result.rotation.matrix().determinant();
        assert!((det - 1.0).abs() < 1e-6, "determinant was {}", det);
        // A mirror image cannot be superposed exactly by a proper rotation.
        assert!(result.rmsd > 0.1);
    }

    #[test]
    fn under_determined_fits_still_produce_a_rotation() {
        let predicted = vec![Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)];
        let experimental = vec![Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 2.0, 0.0)];
        let result = superpose(&predicted, &experimental).unwrap();
        assert_eq!(result.n_atoms, 2);
        let det = result.rotation.matrix().determinant();
        assert!((det - 1.0).abs() < 1e-6);
        assert!(result.rmsd < TOLERANCE);
    }

    #[test]
    fn single_point_aligns_exactly() {
        let result = superpose(
            &[Point3::new(5.0, 5.0, 5.0)],
            &[Point3::new(-3.0, 0.0, 9.0)],
        )
        .unwrap();
        assert_eq!(result.n_atoms, 1);
        assert!(result.rmsd.abs() < TOLERANCE);
        let mapped = result.transform_point(&Point3::new(5.0, 5.0, 5.0));
        assert!((mapped - Point3::new(-3.0, 0.0, 9.0)).norm() < TOLERANCE);
    }

    #[test]
    fn non_finite_input_is_a_superposition_error() {
        let predicted = vec![Point3::new(f64::NAN, 0.0, 0.0)];
        let experimental = vec![Point3::new(0.0, 0.0, 0.0)];
        let result = superpose(&predicted, &experimental);
        assert!(matches!(result, Err(SuperpositionError::NonFinite)));
    }

    #[test]
    fn length_mismatch_truncates_to_shorter_prefix() {
        let predicted = helix(10);
        let experimental = helix(7);
        let result = superpose(&predicted, &experimental).unwrap();
        assert_eq!(result.n_atoms, 7);
        assert!(result.rmsd.abs() < 1e-6);
    }

    #[test]
    fn transform_point_applies_rotation_then_translation() {
        let points = helix(12);
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), 1.1);
        let translation = Vector3::new(3.0, -2.0, 7.0);
        let moved = apply_rigid(&points, &rotation, &translation);
        let result = superpose(&points, &moved).unwrap();
        for (p, m) in points.iter().zip(moved.iter()) {
            assert!((result.transform_point(p) - m).norm() < 1e-6);
        }
    }
}
