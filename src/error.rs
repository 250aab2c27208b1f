use thiserror::Error;

/// Top-level error type for the linecross kernel.
///
/// Geometric outcomes (parallel, apart, too short, ...) are never errors.
/// Only caller contract violations end up here.
#[derive(Debug, Error)]
pub enum LinecrossError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}

/// Errors raised when a vector cannot serve the role it was given.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("vector is not unit length (norm = {norm})")]
    NotNormalized { norm: f64 },
}

/// Errors raised for invalid tolerance configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("tolerance {name} = {value} must not be negative")]
    Negative { name: &'static str, value: f64 },

    #[error("tolerance {name} = {value} must be finite")]
    NotFinite { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`LinecrossError`].
pub type Result<T> = std::result::Result<T, LinecrossError>;
