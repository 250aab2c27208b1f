use tracing::trace;

use crate::geometry::Line;
use crate::math::{Point, ZeroToOne};

use super::infinite::closest_approach_infinite;
use super::kind::IntersectionKind;
use super::param::{IntersectionParam, ParamPair};
use super::settings::Tolerances;

/// Classifies how the finite segments `a` and `b` relate.
///
/// Runs the infinite-line solver and interprets its answer against the
/// segments' extents. Every input maps to exactly one [`IntersectionKind`];
/// degeneracy, parallelism and separation are outcomes, not errors.
#[must_use]
pub fn classify_finite<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    tol: &Tolerances,
) -> IntersectionKind {
    let param = closest_approach_infinite(a, b, tol);
    let kind = classify_param(a, b, param, tol);
    trace!(?param, ?kind, "classified segments");
    kind
}

/// Interprets an infinite-line result for the finite segments `a` and `b`.
///
/// `param` must come from [`closest_approach_infinite`] on the same lines and
/// tolerances.
#[must_use]
pub fn classify_param<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    param: IntersectionParam,
    tol: &Tolerances,
) -> IntersectionKind {
    match param {
        IntersectionParam::TooShortA => IntersectionKind::TooShortA,
        IntersectionParam::TooShortB => IntersectionKind::TooShortB,
        IntersectionParam::TooShortBoth => IntersectionKind::TooShortBoth,
        IntersectionParam::TwoParam(pair) => classify_crossing(a, b, pair, tol),
        IntersectionParam::Parallel => classify_parallel(a, b, false, tol),
        IntersectionParam::Coincident => classify_parallel(a, b, true, tol),
    }
}

fn classify_crossing<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    pair: ParamPair,
    tol: &Tolerances,
) -> IntersectionKind {
    let len_a = a.length();
    let len_b = b.length();
    let zt = ZeroToOne::classify_on_length(pair.t, len_a, tol.length());
    let zu = ZeroToOne::classify_on_length(pair.u, len_b, tol.length());

    if !(zt.is_within() && zu.is_within()) {
        let closest = closest_on_segments(a, b, pair, len_a, len_b);
        trace!(?pair, ?closest, "closest approach outside segments");
        return IntersectionKind::Apart(closest);
    }

    let at = ParamPair::new(zt.snap(pair.t), zu.snap(pair.u));
    if D > 2 {
        let gap = (a.point_at(at.t) - b.point_at(at.u)).norm();
        if gap > tol.length() {
            return IntersectionKind::Skew(at);
        }
    }

    match (zt.is_end(), zu.is_end()) {
        (false, false) => IntersectionKind::Intersecting(at),
        (true, false) => IntersectionKind::IntersectingEndsFirst(at),
        (false, true) => IntersectionKind::IntersectingEndsSecond(at),
        (true, true) => IntersectionKind::IntersectingEndsBoth(at),
    }
}

/// Closest points of the finite segments, starting from the infinite-line
/// solution `pair`.
///
/// One corrective step: clamp the parameter that lies further outside its
/// segment, project that point onto the other segment (clamped), then
/// project back once more (clamped).
fn closest_on_segments<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    pair: ParamPair,
    len_a: f64,
    len_b: f64,
) -> ParamPair {
    let excess_a = outside_by(pair.t) * len_a;
    let excess_b = outside_by(pair.u) * len_b;
    if excess_a >= excess_b {
        let t = pair.t.clamp(0.0, 1.0);
        let u = project_clamped(b, &a.point_at(t));
        let t = project_clamped(a, &b.point_at(u));
        ParamPair::new(t, u)
    } else {
        let u = pair.u.clamp(0.0, 1.0);
        let t = project_clamped(a, &b.point_at(u));
        let u = project_clamped(b, &a.point_at(t));
        ParamPair::new(t, u)
    }
}

/// How far `t` lies outside `[0, 1]`.
fn outside_by(t: f64) -> f64 {
    if t < 0.0 {
        -t
    } else if t > 1.0 {
        t - 1.0
    } else {
        0.0
    }
}

fn project_clamped<const D: usize>(line: &Line<D>, point: &Point<D>) -> f64 {
    line.projection_parameter(point).clamp(0.0, 1.0)
}

/// Parallel and collinear segments.
///
/// Works on `b` oriented along `a` (without touching the input) and locates
/// its ends on `a`'s parameter axis to pick the ordering case. `coincident`
/// is the infinite-line verdict; the segments are collinear only if it holds
/// and every endpoint lies on the other line.
fn classify_parallel<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    coincident: bool,
    tol: &Tolerances,
) -> IntersectionKind {
    let da = a.direction();
    let a_sq = da.norm_squared();
    let len_a = a_sq.sqrt();

    let flipped = da.dot(&b.direction()) < 0.0;
    // Ends of b in a's direction, with their parameters on the original b.
    let (b_first, u_first, b_last, u_last) = if flipped {
        (b.to(), 1.0, b.from(), 0.0)
    } else {
        (b.from(), 0.0, b.to(), 1.0)
    };
    let s0 = (b_first - a.from()).dot(&da) / a_sq;
    let s1 = (b_last - a.from()).dot(&da) / a_sq;

    // Parameter-space tolerance on a.
    let eps = tol.length() / len_a;
    let near = |s: f64, target: f64| (s - target).abs() <= eps;
    let u_at = |t: f64| b.projection_parameter(&a.point_at(t));

    if !(coincident && is_collinear(a, b, tol)) {
        if let Some(contact) = endpoint_contact(a, b, tol) {
            trace!(s0, s1, flipped, ?contact, "parallel, touching at an end");
            return contact;
        }
        let lo = s0.max(0.0);
        let hi = s1.min(1.0);
        let pair = if lo <= hi {
            let mid = 0.5 * (lo + hi);
            ParamPair::new(mid, u_at(mid).clamp(0.0, 1.0))
        } else if s1 < 0.0 {
            ParamPair::new(0.0, u_last)
        } else {
            ParamPair::new(1.0, u_first)
        };
        trace!(s0, s1, flipped, "parallel, not collinear");
        return IntersectionKind::Parallel(pair);
    }

    trace!(s0, s1, flipped, "collinear");

    if near(s0, 0.0) && near(s1, 1.0) {
        let start = ParamPair::new(0.0, u_first);
        let end = ParamPair::new(1.0, u_last);
        return if flipped {
            IntersectionKind::IdenticalFlipped { start, end }
        } else {
            IntersectionKind::Identical { start, end }
        };
    }

    if near(s1, 0.0) {
        return continuation(ParamPair::new(0.0, u_last), flipped);
    }
    if near(s0, 1.0) {
        return continuation(ParamPair::new(1.0, u_first), flipped);
    }

    if s1 < 0.0 {
        return IntersectionKind::CoincidentApart(ParamPair::new(0.0, u_last));
    }
    if s0 > 1.0 {
        return IntersectionKind::CoincidentApart(ParamPair::new(1.0, u_first));
    }

    let start = if near(s0, 0.0) {
        ParamPair::new(0.0, u_first)
    } else if s0 > 0.0 {
        ParamPair::new(s0, u_first)
    } else {
        ParamPair::new(0.0, u_at(0.0))
    };
    let end = if near(s1, 1.0) {
        ParamPair::new(1.0, u_last)
    } else if s1 < 1.0 {
        ParamPair::new(s1, u_last)
    } else {
        ParamPair::new(1.0, u_at(1.0))
    };
    IntersectionKind::Overlapping { start, end }
}

fn continuation(at: ParamPair, flipped: bool) -> IntersectionKind {
    if flipped {
        IntersectionKind::ContinuationFlipped(at)
    } else {
        IntersectionKind::Continuation(at)
    }
}

/// Contact between parallel segments that are not collinear.
///
/// Such segments can only meet near an endpoint. A shared endpoint wins over
/// an endpoint resting on the other segment; among equals the smallest gap
/// wins.
fn endpoint_contact<const D: usize>(
    a: &Line<D>,
    b: &Line<D>,
    tol: &Tolerances,
) -> Option<IntersectionKind> {
    let limit = tol.length();
    let ends = [0.0, 1.0];

    let mut best: Option<(f64, IntersectionKind)> = None;
    for t in ends {
        for u in ends {
            let gap = (a.point_at(t) - b.point_at(u)).norm();
            let kind = IntersectionKind::IntersectingEndsBoth(ParamPair::new(t, u));
            keep_closest(&mut best, gap, kind, limit);
        }
    }
    if let Some((_, kind)) = best {
        return Some(kind);
    }

    let (len_a, len_b) = (a.length(), b.length());
    for end in ends {
        // End of a against the body of b.
        let p = a.point_at(end);
        let u = project_clamped(b, &p);
        let zu = ZeroToOne::classify_on_length(u, len_b, limit);
        let at = ParamPair::new(end, zu.snap(u));
        let kind = if zu.is_end() {
            IntersectionKind::IntersectingEndsBoth(at)
        } else {
            IntersectionKind::IntersectingEndsFirst(at)
        };
        keep_closest(&mut best, (p - b.point_at(u)).norm(), kind, limit);

        // End of b against the body of a.
        let q = b.point_at(end);
        let t = project_clamped(a, &q);
        let zt = ZeroToOne::classify_on_length(t, len_a, limit);
        let at = ParamPair::new(zt.snap(t), end);
        let kind = if zt.is_end() {
            IntersectionKind::IntersectingEndsBoth(at)
        } else {
            IntersectionKind::IntersectingEndsSecond(at)
        };
        keep_closest(&mut best, (q - a.point_at(t)).norm(), kind, limit);
    }
    best.map(|(_, kind)| kind)
}

fn keep_closest(
    best: &mut Option<(f64, IntersectionKind)>,
    gap: f64,
    kind: IntersectionKind,
    limit: f64,
) {
    if gap > limit {
        return;
    }
    let closer = match *best {
        Some((closest, _)) => gap < closest,
        None => true,
    };
    if closer {
        *best = Some((gap, kind));
    }
}

/// Whether every endpoint of each segment lies within the length tolerance
/// of the other segment's infinite line.
fn is_collinear<const D: usize>(a: &Line<D>, b: &Line<D>, tol: &Tolerances) -> bool {
    let limit = tol.length();
    offset_from_line(a, b.from()) <= limit
        && offset_from_line(a, b.to()) <= limit
        && offset_from_line(b, a.from()) <= limit
        && offset_from_line(b, a.to()) <= limit
}

/// Perpendicular distance from `point` to the infinite line through `line`.
fn offset_from_line<const D: usize>(line: &Line<D>, point: &Point<D>) -> f64 {
    let w = point - line.from();
    (w - line.direction() * line.projection_parameter(point)).norm()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{AngleTolerance, Point2, Point3};

    fn l2(x0: f64, y0: f64, x1: f64, y1: f64) -> Line<2> {
        Line::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn l3(from: [f64; 3], to: [f64; 3]) -> Line<3> {
        Line::new(Point3::from(from), Point3::from(to))
    }

    fn classify2(a: &Line<2>, b: &Line<2>) -> IntersectionKind {
        classify_finite(a, b, &Tolerances::default())
    }

    fn pair_of(kind: IntersectionKind) -> ParamPair {
        match kind.params().as_slice() {
            [p] => *p,
            other => panic!("expected one pair in {kind:?}, got {other:?}"),
        }
    }

    #[test]
    fn interior_crossing() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(5.0, -5.0, 5.0, 5.0));
        assert_eq!(k, IntersectionKind::Intersecting(ParamPair::new(0.5, 0.5)));
    }

    #[test]
    fn corner_touch() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(10.0, 0.0, 10.0, 10.0));
        assert_eq!(k, IntersectionKind::IntersectingEndsBoth(ParamPair::new(1.0, 0.0)));
    }

    #[test]
    fn t_junctions() {
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let stem = l2(4.0, 0.0, 4.0, 3.0);
        assert_eq!(
            classify2(&a, &stem),
            IntersectionKind::IntersectingEndsSecond(ParamPair::new(0.4, 0.0))
        );
        assert_eq!(
            classify2(&stem, &a),
            IntersectionKind::IntersectingEndsFirst(ParamPair::new(0.0, 0.4))
        );
    }

    #[test]
    fn roundoff_at_endpoint_still_touches() {
        // Endpoint of b sits 1e-9 past a's end: inside the distance tolerance.
        let k = classify2(&l2(0.0, 0.0, 1.0, 0.0), &l2(1.0 + 1e-9, -1.0, 1.0 + 1e-9, 1.0));
        assert_eq!(k, IntersectionKind::IntersectingEndsFirst(ParamPair::new(1.0, 0.5)));
    }

    #[test]
    fn apart_with_corrected_parameters() {
        // Infinite lines meet at (12, 0), beyond a's end.
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let b = l2(12.0, -1.0, 12.0, 1.0);
        let pair = pair_of(classify2(&a, &b));
        assert!(matches!(classify2(&a, &b), IntersectionKind::Apart(_)));
        assert_relative_eq!(pair.t, 1.0);
        assert_relative_eq!(pair.u, 0.5);
    }

    #[test]
    fn apart_when_second_parameter_is_outside() {
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let b = l2(3.0, 2.0, 3.0, 5.0);
        match classify2(&a, &b) {
            IntersectionKind::Apart(p) => {
                assert_relative_eq!(p.t, 0.3);
                assert_relative_eq!(p.u, 0.0);
            }
            other => panic!("expected Apart, got {other:?}"),
        }
    }

    #[test]
    fn parallel_reports_middle_of_shared_run() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(0.0, 1.0, 10.0, 1.0));
        assert_eq!(k, IntersectionKind::Parallel(ParamPair::new(0.5, 0.5)));
    }

    #[test]
    fn parallel_without_shared_run_reports_nearest_ends() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(30.0, 1.0, 20.0, 1.0));
        assert_eq!(k, IntersectionKind::Parallel(ParamPair::new(1.0, 1.0)));
    }

    #[test]
    fn continuation_same_direction() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(10.0, 0.0, 20.0, 0.0));
        assert_eq!(k, IntersectionKind::Continuation(ParamPair::new(1.0, 0.0)));
    }

    #[test]
    fn continuation_opposite_direction() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(20.0, 0.0, 10.0, 0.0));
        assert_eq!(k, IntersectionKind::ContinuationFlipped(ParamPair::new(1.0, 1.0)));
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(0.0, 0.0, -5.0, 0.0));
        assert_eq!(k, IntersectionKind::ContinuationFlipped(ParamPair::new(0.0, 0.0)));
    }

    #[test]
    fn coincident_apart() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(20.0, 0.0, 30.0, 0.0));
        assert_eq!(k, IntersectionKind::CoincidentApart(ParamPair::new(1.0, 0.0)));
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(-20.0, 0.0, -30.0, 0.0));
        assert_eq!(k, IntersectionKind::CoincidentApart(ParamPair::new(0.0, 0.0)));
    }

    #[test]
    fn identical_both_orientations() {
        let a = l2(1.0, 1.0, 4.0, 5.0);
        assert_eq!(
            classify2(&a, &a),
            IntersectionKind::Identical {
                start: ParamPair::new(0.0, 0.0),
                end: ParamPair::new(1.0, 1.0),
            }
        );
        assert_eq!(
            classify2(&a, &a.reversed()),
            IntersectionKind::IdenticalFlipped {
                start: ParamPair::new(0.0, 1.0),
                end: ParamPair::new(1.0, 0.0),
            }
        );
    }

    #[test]
    fn overlapping_partial() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(5.0, 0.0, 15.0, 0.0));
        match k {
            IntersectionKind::Overlapping { start, end } => {
                assert_relative_eq!(start.t, 0.5);
                assert_relative_eq!(start.u, 0.0);
                assert_relative_eq!(end.t, 1.0);
                assert_relative_eq!(end.u, 0.5);
            }
            other => panic!("expected Overlapping, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_contained_and_flipped() {
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(8.0, 0.0, 2.0, 0.0));
        match k {
            IntersectionKind::Overlapping { start, end } => {
                assert_relative_eq!(start.t, 0.2);
                assert_relative_eq!(start.u, 1.0);
                assert_relative_eq!(end.t, 0.8);
                assert_relative_eq!(end.u, 0.0);
            }
            other => panic!("expected Overlapping, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_containing() {
        let k = classify2(&l2(2.0, 0.0, 8.0, 0.0), &l2(0.0, 0.0, 10.0, 0.0));
        match k {
            IntersectionKind::Overlapping { start, end } => {
                assert_relative_eq!(start.t, 0.0);
                assert_relative_eq!(start.u, 0.2);
                assert_relative_eq!(end.t, 1.0);
                assert_relative_eq!(end.u, 0.8);
            }
            other => panic!("expected Overlapping, got {other:?}"),
        }
    }

    #[test]
    fn u_turn_over_the_same_run_overlaps() {
        // b shares an endpoint with a and runs back over part of it.
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(0.0, 0.0, 4.0, 0.0));
        assert!(matches!(k, IntersectionKind::Overlapping { .. }), "{k:?}");
        let k = classify2(&l2(0.0, 0.0, 10.0, 0.0), &l2(10.0, 0.0, 4.0, 0.0));
        match k {
            IntersectionKind::Overlapping { start, end } => {
                assert_relative_eq!(start.t, 0.4);
                assert_relative_eq!(end.t, 1.0);
                assert_relative_eq!(end.u, 0.0);
            }
            other => panic!("expected Overlapping, got {other:?}"),
        }
    }

    #[test]
    fn too_short_is_reported_first() {
        let a = l2(0.0, 0.0, 1e-9, 0.0);
        let b = l2(0.0, 0.0, 10.0, 0.0);
        assert_eq!(classify2(&a, &b), IntersectionKind::TooShortA);
        assert_eq!(classify2(&b, &a), IntersectionKind::TooShortB);
        assert_eq!(classify2(&a, &a), IntersectionKind::TooShortBoth);
    }

    #[test]
    fn skew_in_3d() {
        let a = l3([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let b = l3([1.0, -1.0, 3.0], [1.0, 1.0, 3.0]);
        let k = classify_finite(&a, &b, &Tolerances::default());
        assert_eq!(k, IntersectionKind::Skew(ParamPair::new(0.5, 0.5)));
    }

    #[test]
    fn crossing_in_3d() {
        let a = l3([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
        let b = l3([2.0, 0.0, 0.0], [0.0, 2.0, 2.0]);
        let k = classify_finite(&a, &b, &Tolerances::default());
        assert_eq!(k, IntersectionKind::Intersecting(ParamPair::new(0.5, 0.5)));
    }

    #[test]
    fn apart_in_3d() {
        let a = l3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = l3([3.0, -1.0, 1.0], [3.0, 1.0, 1.0]);
        match classify_finite(&a, &b, &Tolerances::default()) {
            IntersectionKind::Apart(p) => {
                assert_relative_eq!(p.t, 1.0);
                assert_relative_eq!(p.u, 0.5);
            }
            other => panic!("expected Apart, got {other:?}"),
        }
    }

    #[test]
    fn diverging_from_a_shared_start_touches_there() {
        // b leaves a's line by 0.2 degrees: parallel at 0.25 degrees, not
        // collinear, but both segments start at the origin.
        let (s, c) = 0.2_f64.to_radians().sin_cos();
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let b = l2(0.0, 0.0, 100.0 * c, 100.0 * s);
        assert_eq!(
            closest_approach_infinite(&a, &b, &Tolerances::default()),
            IntersectionParam::Coincident
        );
        let ab = classify2(&a, &b);
        assert_eq!(ab, IntersectionKind::IntersectingEndsBoth(ParamPair::new(0.0, 0.0)));
        assert!(ab.is_touching());
        assert_eq!(classify2(&b, &a), ab.mirrored());
    }

    #[test]
    fn diverging_from_a_shared_end_touches_there() {
        let (s, c) = 0.1_f64.to_radians().sin_cos();
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let b = l2(10.0 + 50.0 * c, 50.0 * s, 10.0, 0.0);
        assert_eq!(
            classify2(&a, &b),
            IntersectionKind::IntersectingEndsBoth(ParamPair::new(1.0, 1.0))
        );
    }

    #[test]
    fn end_resting_on_a_near_parallel_segment() {
        let (s, c) = 0.2_f64.to_radians().sin_cos();
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let b = l2(5.0, 0.0, 5.0 + 100.0 * c, 100.0 * s);
        let ab = classify2(&a, &b);
        assert_eq!(ab, IntersectionKind::IntersectingEndsSecond(ParamPair::new(0.5, 0.0)));
        assert_eq!(
            classify2(&b, &a),
            IntersectionKind::IntersectingEndsFirst(ParamPair::new(0.0, 0.5))
        );
    }

    #[test]
    fn offset_parallel_segments_do_not_touch() {
        let (s, c) = 0.2_f64.to_radians().sin_cos();
        let a = l2(0.0, 0.0, 10.0, 0.0);
        let b = l2(0.0, 0.5, 100.0 * c, 0.5 + 100.0 * s);
        assert!(matches!(classify2(&a, &b), IntersectionKind::Parallel(_)));
    }

    #[test]
    fn tiny_tolerance_keeps_tiny_collinear_segments_collinear() {
        let tol = Tolerances::new(1e-16, AngleTolerance::default()).unwrap();
        let a = l2(0.0, 0.0, 1e-13, 0.0);
        let b = l2(2e-13, 0.0, 3e-13, 0.0);
        assert_eq!(closest_approach_infinite(&a, &b, &tol), IntersectionParam::Coincident);
        assert_eq!(
            classify_finite(&a, &b, &tol),
            IntersectionKind::CoincidentApart(ParamPair::new(1.0, 0.0))
        );

        // The same layout at unit scale with a matching tolerance.
        let tol = Tolerances::new(1e-3, AngleTolerance::default()).unwrap();
        let a = l2(0.0, 0.0, 1.0, 0.0);
        let b = l2(2.0, 0.0, 3.0, 0.0);
        assert_eq!(
            classify_finite(&a, &b, &tol),
            IntersectionKind::CoincidentApart(ParamPair::new(1.0, 0.0))
        );
    }

    #[test]
    fn tiny_tolerance_overlap_reports_projected_parameters() {
        let tol = Tolerances::new(1e-16, AngleTolerance::default()).unwrap();
        let a = l2(0.0, 0.0, 4e-13, 0.0);
        let b = l2(2e-13, 0.0, 6e-13, 0.0);
        match classify_finite(&a, &b, &tol) {
            IntersectionKind::Overlapping { start, end } => {
                assert_relative_eq!(start.t, 0.5, epsilon = 1e-9);
                assert_relative_eq!(start.u, 0.0);
                assert_relative_eq!(end.t, 1.0);
                assert_relative_eq!(end.u, 0.5, epsilon = 1e-9);
            }
            other => panic!("expected Overlapping, got {other:?}"),
        }
    }
}
