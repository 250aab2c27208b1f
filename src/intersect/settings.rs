use crate::error::{Result, ToleranceError};
use crate::math::tolerance::{DEFAULT_MIN_LENGTH, ZERO_LENGTH_TOLERANCE};
use crate::math::{is_short_length_sq, AngleTolerance};

/// Tolerances for one classification call.
///
/// `length` is both the minimum usable line length and the distance below
/// which two points count as the same point. `angle` selects the
/// near-parallel threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    length: f64,
    angle: AngleTolerance,
}

impl Default for Tolerances {
    /// Finite-segment defaults: `1e-6` and 0.25°.
    fn default() -> Self {
        Self {
            length: DEFAULT_MIN_LENGTH,
            angle: AngleTolerance::default(),
        }
    }
}

impl Tolerances {
    /// Creates validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is negative or not finite.
    pub fn new(length: f64, angle: AngleTolerance) -> Result<Self> {
        if !length.is_finite() {
            return Err(ToleranceError::NotFinite {
                name: "length",
                value: length,
            }
            .into());
        }
        if length < 0.0 {
            return Err(ToleranceError::Negative {
                name: "length",
                value: length,
            }
            .into());
        }
        Ok(Self { length, angle })
    }

    /// Infinite-line defaults: `1e-12` and 0.25°.
    #[must_use]
    pub fn infinite_lines() -> Self {
        Self {
            length: ZERO_LENGTH_TOLERANCE,
            angle: AngleTolerance::default(),
        }
    }

    /// Returns a copy with a different angle tolerance.
    #[must_use]
    pub fn with_angle(self, angle: AngleTolerance) -> Self {
        Self { angle, ..self }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn angle(&self) -> AngleTolerance {
        self.angle
    }

    /// Whether a squared length falls short of the minimum length.
    ///
    /// An exactly zero length is always short, even with a zero tolerance.
    pub(crate) fn is_short_sq(&self, length_sq: f64) -> bool {
        is_short_length_sq(length_sq, self.length)
    }
}
