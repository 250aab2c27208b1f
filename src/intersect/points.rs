//! Projection of parameter results onto concrete points.
//!
//! Nothing here is cached: points are recomputed from the lines and the
//! parameters by `from + direction * t` on every call.

use crate::geometry::Line;
use crate::math::Point;

use super::finite::classify_finite;
use super::infinite::closest_approach_infinite;
use super::kind::IntersectionKind;
use super::param::IntersectionParam;
use super::settings::Tolerances;

/// Point-valued counterpart of [`IntersectionParam`] and [`IntersectionKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionPoints<const D: usize> {
    /// The lines meet at one point.
    Single(Point<D>),
    /// Closest points on the first and second line.
    Pair { first: Point<D>, second: Point<D> },
    /// Start and end of a shared collinear run.
    Overlap { start: Point<D>, end: Point<D> },
    /// Infinite lines parallel; no meaningful point.
    Parallel,
    /// Infinite lines coincident; no single point.
    Coincident,
    TooShortA,
    TooShortB,
    TooShortBoth,
}

/// 2D point result.
pub type IntersectionPoints2 = IntersectionPoints<2>;

/// 3D point result.
pub type IntersectionPoints3 = IntersectionPoints<3>;

impl<const D: usize> IntersectionPoints<D> {
    /// Distance between the two lines at the reported points, if any.
    ///
    /// Zero for [`Single`](Self::Single) and [`Overlap`](Self::Overlap).
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        match self {
            Self::Single(_) | Self::Overlap { .. } => Some(0.0),
            Self::Pair { first, second } => Some((first - second).norm()),
            Self::Parallel
            | Self::Coincident
            | Self::TooShortA
            | Self::TooShortB
            | Self::TooShortBoth => None,
        }
    }
}

impl IntersectionParam {
    /// Evaluates the infinite-line result on `a` and `b`.
    ///
    /// In 2D a [`TwoParam`](Self::TwoParam) result is always a single point.
    /// In 3D it is a single point only when the two feet lie within the
    /// length tolerance of each other.
    #[must_use]
    pub fn points<const D: usize>(
        &self,
        a: &Line<D>,
        b: &Line<D>,
        tol: &Tolerances,
    ) -> IntersectionPoints<D> {
        match *self {
            Self::TwoParam(pair) => {
                let first = a.point_at(pair.t);
                if D == 2 {
                    return IntersectionPoints::Single(first);
                }
                let second = b.point_at(pair.u);
                if (first - second).norm() <= tol.length() {
                    IntersectionPoints::Single(first)
                } else {
                    IntersectionPoints::Pair { first, second }
                }
            }
            Self::Parallel => IntersectionPoints::Parallel,
            Self::Coincident => IntersectionPoints::Coincident,
            Self::TooShortA => IntersectionPoints::TooShortA,
            Self::TooShortB => IntersectionPoints::TooShortB,
            Self::TooShortBoth => IntersectionPoints::TooShortBoth,
        }
    }
}

impl IntersectionKind {
    /// Evaluates the finite classification on `a` and `b`.
    #[must_use]
    pub fn points<const D: usize>(&self, a: &Line<D>, b: &Line<D>) -> IntersectionPoints<D> {
        match *self {
            Self::Intersecting(p)
            | Self::IntersectingEndsBoth(p)
            | Self::IntersectingEndsFirst(p)
            | Self::IntersectingEndsSecond(p)
            | Self::Continuation(p)
            | Self::ContinuationFlipped(p) => IntersectionPoints::Single(a.point_at(p.t)),
            Self::Skew(p) | Self::Apart(p) | Self::Parallel(p) | Self::CoincidentApart(p) => {
                IntersectionPoints::Pair {
                    first: a.point_at(p.t),
                    second: b.point_at(p.u),
                }
            }
            Self::Overlapping { start, end }
            | Self::Identical { start, end }
            | Self::IdenticalFlipped { start, end } => IntersectionPoints::Overlap {
                start: a.point_at(start.t),
                end: a.point_at(end.t),
            },
            Self::TooShortA => IntersectionPoints::TooShortA,
            Self::TooShortB => IntersectionPoints::TooShortB,
            Self::TooShortBoth => IntersectionPoints::TooShortBoth,
        }
    }
}

/// Classifies the finite segments and returns the resulting points.
#[must_use]
pub fn intersection_points<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    tol: &Tolerances,
) -> IntersectionPoints<D> {
    classify_finite(a, b, tol).points(a, b)
}

/// Solves the infinite lines and returns the resulting points.
#[must_use]
pub fn infinite_intersection_points<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    tol: &Tolerances,
) -> IntersectionPoints<D> {
    closest_approach_infinite(a, b, tol).points(a, b, tol)
}
