use tracing::trace;

use crate::geometry::Line;
use crate::math::relative_angle_discriminant;

use super::param::{IntersectionParam, ParamPair};
use super::settings::Tolerances;

/// Closest approach of two infinite lines.
///
/// Given lines `a.from + t * a.dir` and `b.from + u * b.dir`, returns the
/// `(t, u)` at which they come closest (in 2D, where they cross). Degenerate
/// directions are reported before any division, and near-parallel directions
/// are detected with the scale-free relative angle discriminant so the result
/// does not depend on the lines' absolute size.
#[must_use]
pub fn closest_approach_infinite<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    tol: &Tolerances,
) -> IntersectionParam {
    let da = a.direction();
    let db = b.direction();

    let a_sq = da.norm_squared();
    let b_sq = db.norm_squared();

    match (tol.is_short_sq(a_sq), tol.is_short_sq(b_sq)) {
        (true, true) => {
            trace!(a_sq, b_sq, "both lines too short");
            return IntersectionParam::TooShortBoth;
        }
        (true, false) => {
            trace!(a_sq, "first line too short");
            return IntersectionParam::TooShortA;
        }
        (false, true) => {
            trace!(b_sq, "second line too short");
            return IntersectionParam::TooShortB;
        }
        (false, false) => {}
    }

    let w = a.from() - b.from();
    let ab = da.dot(&db);
    let aw = da.dot(&w);
    let bw = db.dot(&w);

    let rel = relative_angle_discriminant(a_sq, b_sq, ab);
    if rel < tol.angle().relative_discriminant() {
        // Offset of b.from from the infinite line through a.
        let offset = (w - da * (aw / a_sq)).norm();
        trace!(rel, offset, "lines parallel");
        return if offset <= tol.length() {
            IntersectionParam::Coincident
        } else {
            IntersectionParam::Parallel
        };
    }

    let discriminant = a_sq * b_sq - ab * ab;
    let t = (ab * bw - b_sq * aw) / discriminant;
    let u = (a_sq * bw - ab * aw) / discriminant;
    trace!(rel, t, u, "closest approach");
    IntersectionParam::TwoParam(ParamPair::new(t, u))
}
