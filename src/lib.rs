//! Decides how two straight segments (or their infinite extensions) in 2D or
//! 3D relate: crossing, touching at an end, parallel, overlapping, skew,
//! apart, or too short to tell.

pub mod error;
pub mod geometry;
pub mod intersect;
pub mod math;
pub mod operations;

pub use error::{LinecrossError, Result};
pub use geometry::{Line, Line2, Line3};
pub use intersect::{
    classify_finite, closest_approach_infinite, intersection_points, IntersectionKind,
    IntersectionParam, IntersectionPoints, ParamPair, Tolerances,
};
