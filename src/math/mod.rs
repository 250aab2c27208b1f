pub mod tolerance;
pub mod unit;
pub mod zero_to_one;

pub use tolerance::{
    classify_angle, is_short_length_sq, relative_angle_discriminant, AngleRelation, AngleTolerance,
};
pub use unit::{checked_unit, ensure_unit};
pub use zero_to_one::ZeroToOne;

/// Point type of dimension `D`.
pub type Point<const D: usize> = nalgebra::Point<f64, D>;

/// Vector type of dimension `D`.
pub type Vector<const D: usize> = nalgebra::SVector<f64, D>;

/// Unit-length vector of dimension `D`.
pub type UnitVector<const D: usize> = nalgebra::Unit<Vector<D>>;

/// 2D point type.
pub type Point2 = Point<2>;

/// 3D point type.
pub type Point3 = Point<3>;

/// 2D vector type.
pub type Vector2 = Vector<2>;

/// 3D vector type.
pub type Vector3 = Vector<3>;
