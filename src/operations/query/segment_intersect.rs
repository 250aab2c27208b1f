use tracing::{debug, instrument};

use crate::geometry::Line;
use crate::intersect::{classify_finite, IntersectionKind, IntersectionPoints, Tolerances};

/// Classifies two finite segments against each other.
pub struct SegmentSegmentIntersect<const D: usize> {
    a: Line<D>,
    b: Line<D>,
    tolerances: Tolerances,
}

impl<const D: usize> SegmentSegmentIntersect<D> {
    /// Creates a new `SegmentSegmentIntersect` query with default tolerances.
    #[must_use]
    pub fn new(a: Line<D>, b: Line<D>) -> Self {
        Self {
            a,
            b,
            tolerances: Tolerances::default(),
        }
    }

    /// Replaces the tolerances used by the query.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the query, returning the classification.
    #[must_use]
    #[instrument(level = "debug", skip(self), fields(a = ?self.a, b = ?self.b))]
    pub fn execute(&self) -> IntersectionKind {
        let kind = classify_finite(&self.a, &self.b, &self.tolerances);
        debug!(?kind, "segment-segment query");
        kind
    }

    /// Executes the query and evaluates the classification as points.
    #[must_use]
    pub fn points(&self) -> IntersectionPoints<D> {
        self.execute().points(&self.a, &self.b)
    }
}
