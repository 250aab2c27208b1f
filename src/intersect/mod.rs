//! Pairwise line and segment intersection.
//!
//! Layers, leaves first: [`closest_approach_infinite`] solves the two infinite
//! lines, [`classify_finite`] interprets that answer against the segments'
//! extents, and [`intersection_points`] turns either result into points.

mod finite;
mod infinite;
mod kind;
mod param;
mod points;
mod settings;

pub use finite::{classify_finite, classify_param};
pub use infinite::closest_approach_infinite;
pub use kind::IntersectionKind;
pub use param::{IntersectionParam, ParamPair};
pub use points::{
    infinite_intersection_points, intersection_points, IntersectionPoints, IntersectionPoints2,
    IntersectionPoints3,
};
pub use settings::Tolerances;
