//! Dimensionless tolerance tables.
//!
//! Every "is this effectively zero / parallel / at a boundary" decision in the
//! crate reads one of these constants instead of inventing its own epsilon.
//! Angles are never compared through `acos`: near ±1 its slope is unbounded and
//! a dot product of unit vectors against a precomputed cosine is both cheaper
//! and more precise.

use super::UnitVector;

/// Minimum length below which a direction vector is considered undefined.
pub const ZERO_LENGTH_TOLERANCE: f64 = 1e-12;

/// Square of [`ZERO_LENGTH_TOLERANCE`], for comparisons against squared norms.
pub const ZERO_LENGTH_TOLERANCE_SQ: f64 = ZERO_LENGTH_TOLERANCE * ZERO_LENGTH_TOLERANCE;

/// Default minimum segment length (and distance tolerance) for finite classification.
pub const DEFAULT_MIN_LENGTH: f64 = 1e-6;

/// Snapping window around the parameters 0.0 and 1.0: six machine epsilons.
pub const PARAMETER_SNAP: f64 = 6.0 * f64::EPSILON;

// Cosines of fixed angles.

pub const COS_0_01_DEG: f64 = 0.999_999_984_769_129_1;
pub const COS_0_1_DEG: f64 = 0.999_998_476_913_287_7;
pub const COS_0_25_DEG: f64 = 0.999_990_480_720_734_5;
pub const COS_0_5_DEG: f64 = 0.999_961_923_064_171_3;
pub const COS_1_DEG: f64 = 0.999_847_695_156_391_3;
pub const COS_2_DEG: f64 = 0.999_390_827_019_095_8;
pub const COS_5_DEG: f64 = 0.996_194_698_091_745_5;
pub const COS_10_DEG: f64 = 0.984_807_753_012_208;
pub const COS_45_DEG: f64 = 0.707_106_781_186_547_6;
pub const COS_89_DEG: f64 = 0.017_452_406_437_283_6;
pub const COS_89_75_DEG: f64 = 0.004_363_309_284_746_582;
pub const COS_90_25_DEG: f64 = -0.004_363_309_284_746_46;
pub const COS_91_DEG: f64 = -0.017_452_406_437_283_477;
pub const COS_135_DEG: f64 = -0.707_106_781_186_547_5;
pub const COS_179_DEG: f64 = -0.999_847_695_156_391_3;
pub const COS_179_75_DEG: f64 = -0.999_990_480_720_734_5;
pub const COS_179_99_DEG: f64 = -0.999_999_984_769_129_1;

// Sines of the selectable tolerances, i.e. cos(90° - angle).

const SIN_0_01_DEG: f64 = 0.000_174_532_924_313_336_8;
const SIN_0_1_DEG: f64 = 0.001_745_328_365_898_308_8;
const SIN_0_25_DEG: f64 = COS_89_75_DEG;
const SIN_0_5_DEG: f64 = 0.008_726_535_498_373_935;
const SIN_1_DEG: f64 = COS_89_DEG;
const SIN_2_DEG: f64 = 0.034_899_496_702_500_97;
const SIN_5_DEG: f64 = 0.087_155_742_747_658_17;

// Relative angle discriminants `(A*C - B^2) / (A*C + B^2)` at fixed angles.

pub const REL_DISC_0_01_DEG: f64 = 1.523_087_101_878_816_5e-8;
pub const REL_DISC_0_1_DEG: f64 = 1.523_087_872_194_903_7e-6;
pub const REL_DISC_0_25_DEG: f64 = 9.519_324_573_878_069e-6;
pub const REL_DISC_0_5_DEG: f64 = 3.807_766_075_522_418_5e-5;
pub const REL_DISC_1_DEG: f64 = 1.523_164_419_912_838_5e-4;
pub const REL_DISC_2_DEG: f64 = 6.093_585_267_301_105e-4;
pub const REL_DISC_5_DEG: f64 = 3.812_542_016_941_143_3e-3;

/// Whether a squared length falls short of `min_length`.
///
/// An exactly zero length is always short, even when `min_length` is zero.
#[must_use]
pub fn is_short_length_sq(length_sq: f64, min_length: f64) -> bool {
    length_sq < min_length * min_length || length_sq == 0.0
}

/// Selects one of the precomputed angle tolerances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AngleTolerance {
    Deg0_01,
    Deg0_1,
    #[default]
    Deg0_25,
    Deg0_5,
    Deg1,
    Deg2,
    Deg5,
}

impl AngleTolerance {
    /// All selectable tolerances, tightest first.
    pub const ALL: [Self; 7] = [
        Self::Deg0_01,
        Self::Deg0_1,
        Self::Deg0_25,
        Self::Deg0_5,
        Self::Deg1,
        Self::Deg2,
        Self::Deg5,
    ];

    /// The tolerance angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        match self {
            Self::Deg0_01 => 0.01,
            Self::Deg0_1 => 0.1,
            Self::Deg0_25 => 0.25,
            Self::Deg0_5 => 0.5,
            Self::Deg1 => 1.0,
            Self::Deg2 => 2.0,
            Self::Deg5 => 5.0,
        }
    }

    /// Cosine of the tolerance angle.
    #[must_use]
    pub fn cos(self) -> f64 {
        match self {
            Self::Deg0_01 => COS_0_01_DEG,
            Self::Deg0_1 => COS_0_1_DEG,
            Self::Deg0_25 => COS_0_25_DEG,
            Self::Deg0_5 => COS_0_5_DEG,
            Self::Deg1 => COS_1_DEG,
            Self::Deg2 => COS_2_DEG,
            Self::Deg5 => COS_5_DEG,
        }
    }

    /// Sine of the tolerance angle, equal to the cosine of `90° - angle`.
    #[must_use]
    pub fn sin(self) -> f64 {
        match self {
            Self::Deg0_01 => SIN_0_01_DEG,
            Self::Deg0_1 => SIN_0_1_DEG,
            Self::Deg0_25 => SIN_0_25_DEG,
            Self::Deg0_5 => SIN_0_5_DEG,
            Self::Deg1 => SIN_1_DEG,
            Self::Deg2 => SIN_2_DEG,
            Self::Deg5 => SIN_5_DEG,
        }
    }

    /// Relative angle discriminant at the tolerance angle.
    ///
    /// Two directions whose [`relative_angle_discriminant`] falls below this
    /// value are closer than the tolerance angle to being parallel.
    #[must_use]
    pub fn relative_discriminant(self) -> f64 {
        match self {
            Self::Deg0_01 => REL_DISC_0_01_DEG,
            Self::Deg0_1 => REL_DISC_0_1_DEG,
            Self::Deg0_25 => REL_DISC_0_25_DEG,
            Self::Deg0_5 => REL_DISC_0_5_DEG,
            Self::Deg1 => REL_DISC_1_DEG,
            Self::Deg2 => REL_DISC_2_DEG,
            Self::Deg5 => REL_DISC_5_DEG,
        }
    }
}

/// Scale-invariant measure of the angle between two vectors.
///
/// `a_sq` and `b_sq` are the squared lengths of the vectors and `ab` their dot
/// product. The result is `sin²θ / (1 + cos²θ)`: `0.0` for parallel or
/// anti-parallel vectors, `1.0` for perpendicular ones, and independent of the
/// vectors' lengths. Both lengths must be non-zero.
#[must_use]
pub fn relative_angle_discriminant(a_sq: f64, b_sq: f64, ab: f64) -> f64 {
    let ac = a_sq * b_sq;
    let b2 = ab * ab;
    (ac - b2) / (ac + b2)
}

/// Coarse angular relationship between two directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleRelation {
    /// Within the tolerance of 0°.
    Parallel,
    /// Within the tolerance of 180°.
    AntiParallel,
    /// Within the tolerance of 90°.
    Perpendicular,
    /// Anything else.
    Oblique,
}

/// Classifies the angle between two unit directions against `tolerance`.
#[must_use]
pub fn classify_angle<const D: usize>(
    a: &UnitVector<D>,
    b: &UnitVector<D>,
    tolerance: AngleTolerance,
) -> AngleRelation {
    let cos = a.dot(b);
    if cos >= tolerance.cos() {
        AngleRelation::Parallel
    } else if cos <= -tolerance.cos() {
        AngleRelation::AntiParallel
    } else if cos.abs() <= tolerance.sin() {
        AngleRelation::Perpendicular
    } else {
        AngleRelation::Oblique
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Vector2, Vector3};

    fn unit_at_degrees(deg: f64) -> UnitVector<2> {
        let rad = deg.to_radians();
        UnitVector::new_normalize(Vector2::new(rad.cos(), rad.sin()))
    }

    #[test]
    fn cosine_table_matches_libm() {
        for (deg, value) in [
            (0.01, COS_0_01_DEG),
            (0.25, COS_0_25_DEG),
            (1.0, COS_1_DEG),
            (45.0, COS_45_DEG),
            (89.75, COS_89_75_DEG),
            (135.0, COS_135_DEG),
            (179.99, COS_179_99_DEG),
        ] {
            let expected = f64::to_radians(deg).cos();
            assert_relative_eq!(value, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn discriminant_table_matches_definition() {
        for tol in AngleTolerance::ALL {
            let c = tol.degrees().to_radians().cos();
            let expected = (1.0 - c * c) / (1.0 + c * c);
            assert_relative_eq!(tol.relative_discriminant(), expected, max_relative = 1e-6);
            assert_relative_eq!(tol.sin(), tol.degrees().to_radians().sin(), max_relative = 1e-12);
        }
    }

    #[test]
    fn quarter_degree_is_about_1e_minus_5() {
        assert!(REL_DISC_0_25_DEG > 9e-6 && REL_DISC_0_25_DEG < 1e-5);
        assert!(REL_DISC_0_1_DEG > 1.5e-6 && REL_DISC_0_1_DEG < 1.6e-6);
    }

    #[test]
    fn discriminant_is_scale_invariant() {
        let a = Vector3::new(1.0, 0.2, -0.3);
        let b = Vector3::new(-0.4, 1.0, 0.7);
        let small = relative_angle_discriminant(a.norm_squared(), b.norm_squared(), a.dot(&b));
        let (ka, kb) = (a * 1.0e4, b * 3.0e-5);
        let scaled = relative_angle_discriminant(ka.norm_squared(), kb.norm_squared(), ka.dot(&kb));
        assert_relative_eq!(small, scaled, max_relative = 1e-12);
    }

    #[test]
    fn discriminant_extremes() {
        assert_relative_eq!(relative_angle_discriminant(4.0, 9.0, 6.0), 0.0);
        assert_relative_eq!(relative_angle_discriminant(4.0, 9.0, -6.0), 0.0);
        assert_relative_eq!(relative_angle_discriminant(4.0, 9.0, 0.0), 1.0);
    }

    #[test]
    fn angle_classification() {
        let x = unit_at_degrees(0.0);
        let tol = AngleTolerance::Deg0_25;
        assert_eq!(classify_angle(&x, &unit_at_degrees(0.2), tol), AngleRelation::Parallel);
        assert_eq!(classify_angle(&x, &unit_at_degrees(0.3), tol), AngleRelation::Oblique);
        assert_eq!(classify_angle(&x, &unit_at_degrees(179.8), tol), AngleRelation::AntiParallel);
        assert_eq!(classify_angle(&x, &unit_at_degrees(90.2), tol), AngleRelation::Perpendicular);
        assert_eq!(classify_angle(&x, &unit_at_degrees(-89.9), tol), AngleRelation::Perpendicular);
        assert_eq!(classify_angle(&x, &unit_at_degrees(60.0), tol), AngleRelation::Oblique);
    }

    #[test]
    fn zero_length_is_short_at_any_tolerance() {
        assert!(is_short_length_sq(0.0, 0.0));
        assert!(is_short_length_sq(0.0, 1e-6));
        assert!(is_short_length_sq(1e-14, 1e-6));
        assert!(!is_short_length_sq(1e-30, 0.0));
        assert!(!is_short_length_sq(1.0, 1e-6));
    }

    #[test]
    fn default_tolerance_is_quarter_degree() {
        assert_eq!(AngleTolerance::default(), AngleTolerance::Deg0_25);
    }
}
