use tracing::{debug, instrument};

use crate::geometry::Line;
use crate::intersect::{closest_approach_infinite, IntersectionParam, IntersectionPoints, Tolerances};

/// Relates two infinite lines.
pub struct LineLineIntersect<const D: usize> {
    a: Line<D>,
    b: Line<D>,
    tolerances: Tolerances,
}

impl<const D: usize> LineLineIntersect<D> {
    /// Creates a new `LineLineIntersect` query with infinite-line tolerances.
    #[must_use]
    pub fn new(a: Line<D>, b: Line<D>) -> Self {
        Self {
            a,
            b,
            tolerances: Tolerances::infinite_lines(),
        }
    }

    /// Replaces the tolerances used by the query.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the query, returning the parameters of closest approach.
    #[must_use]
    #[instrument(level = "debug", skip(self), fields(a = ?self.a, b = ?self.b))]
    pub fn execute(&self) -> IntersectionParam {
        let param = closest_approach_infinite(&self.a, &self.b, &self.tolerances);
        debug!(?param, "line-line query");
        param
    }

    /// Executes the query and evaluates the result as points.
    #[must_use]
    pub fn points(&self) -> IntersectionPoints<D> {
        self.execute().points(&self.a, &self.b, &self.tolerances)
    }
}
