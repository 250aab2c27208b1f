use crate::error::Result;
use crate::math::tolerance::ZERO_LENGTH_TOLERANCE_SQ;
use crate::math::{
    checked_unit, classify_angle, is_short_length_sq, AngleRelation, AngleTolerance,
};
use crate::math::{Point, UnitVector, Vector, Vector3};

/// A straight line segment from `from` to `to`.
///
/// The parametric form is `P(t) = from + t * (to - from)`, so `t = 0` is
/// `from` and `t = 1` is `to`. The same value also stands for the infinite
/// line through both points; which reading applies is up to the operation.
///
/// A line may have zero or near-zero length. Nothing here divides by the
/// squared length without checking it first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<const D: usize> {
    from: Point<D>,
    to: Point<D>,
}

/// 2D line.
pub type Line2 = Line<2>;

/// 3D line.
pub type Line3 = Line<3>;

impl<const D: usize> Line<D> {
    /// Creates a new line from its two endpoints.
    #[must_use]
    pub fn new(from: Point<D>, to: Point<D>) -> Self {
        Self { from, to }
    }

    /// Returns the start point.
    #[must_use]
    pub fn from(&self) -> &Point<D> {
        &self.from
    }

    /// Returns the end point.
    #[must_use]
    pub fn to(&self) -> &Point<D> {
        &self.to
    }

    /// Returns `to - from`.
    #[must_use]
    pub fn direction(&self) -> Vector<D> {
        self.to - self.from
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Whether the line is shorter than `min_length`.
    ///
    /// A zero-length line is degenerate even for a zero `min_length`.
    #[must_use]
    pub fn is_degenerate(&self, min_length: f64) -> bool {
        is_short_length_sq(self.length_squared(), min_length)
    }

    /// Evaluates `from + direction * t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point<D> {
        self.from + self.direction() * t
    }

    #[must_use]
    pub fn midpoint(&self) -> Point<D> {
        self.point_at(0.5)
    }

    /// Returns the same segment traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Parameter of the orthogonal projection of `point` onto the infinite line.
    ///
    /// Returns `None` when the line is too short for its direction to be defined.
    #[must_use]
    pub fn parameter_of(&self, point: &Point<D>) -> Option<f64> {
        let dir = self.direction();
        let len_sq = dir.norm_squared();
        if len_sq < ZERO_LENGTH_TOLERANCE_SQ {
            return None;
        }
        Some((point - self.from).dot(&dir) / len_sq)
    }

    /// Projection parameter for a line whose direction is already known to
    /// be non-zero under the tolerance in use.
    pub(crate) fn projection_parameter(&self, point: &Point<D>) -> f64 {
        let dir = self.direction();
        (point - self.from).dot(&dir) / dir.norm_squared()
    }

    /// Closest point on the finite segment to `point`.
    #[must_use]
    pub fn closest_point(&self, point: &Point<D>) -> Point<D> {
        match self.parameter_of(point) {
            Some(t) => self.point_at(t.clamp(0.0, 1.0)),
            None => self.from,
        }
    }

    /// Distance from `point` to the finite segment.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point<D>) -> f64 {
        (point - self.closest_point(point)).norm()
    }

    /// Unit tangent pointing from `from` towards `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line has (near) zero length.
    pub fn unit_tangent(&self) -> Result<UnitVector<D>> {
        checked_unit(self.direction())
    }

    /// Angular relationship between the directions of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if either line has (near) zero length.
    pub fn angle_relation(&self, other: &Self, tolerance: AngleTolerance) -> Result<AngleRelation> {
        let a = self.unit_tangent()?;
        let b = other.unit_tangent()?;
        Ok(classify_angle(&a, &b, tolerance))
    }
}

impl Line<2> {
    /// Signed area test of `point` against the directed line.
    ///
    /// Positive on the left, negative on the right, zero on the line. The
    /// magnitude is the distance to the line times the line's length.
    #[must_use]
    pub fn side_of(&self, point: &Point<2>) -> f64 {
        let d = self.direction();
        let w = point - self.from;
        d.x * w.y - d.y * w.x
    }

    /// 2D cross product of the two directions.
    #[must_use]
    pub fn perp_dot(&self, other: &Self) -> f64 {
        let a = self.direction();
        let b = other.direction();
        a.x * b.y - a.y * b.x
    }
}

impl Line<3> {
    /// Cross product of the two directions.
    #[must_use]
    pub fn cross_direction(&self, other: &Self) -> Vector3 {
        self.direction().cross(&other.direction())
    }
}
