use super::tolerance::PARAMETER_SNAP;

/// Where a line parameter falls relative to the unit interval.
///
/// Parameters within [`PARAMETER_SNAP`] of `0.0` or `1.0` snap to the
/// endpoint, so roundoff at a segment end never reads as "outside".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZeroToOne {
    Zero,
    One,
    Between,
    Outside,
}

impl ZeroToOne {
    /// Classifies `t`. NaN is `Outside`.
    #[must_use]
    pub fn classify(t: f64) -> Self {
        if t.abs() <= PARAMETER_SNAP {
            Self::Zero
        } else if (t - 1.0).abs() <= PARAMETER_SNAP {
            Self::One
        } else if t > 0.0 && t < 1.0 {
            Self::Between
        } else {
            Self::Outside
        }
    }

    /// Classifies `t` on a segment of `length`, additionally snapping to an
    /// endpoint when the point at `t` lies within `distance` of it.
    #[must_use]
    pub fn classify_on_length(t: f64, length: f64, distance: f64) -> Self {
        match Self::classify(t) {
            Self::Between | Self::Outside => {
                if (t * length).abs() <= distance {
                    Self::Zero
                } else if ((t - 1.0) * length).abs() <= distance {
                    Self::One
                } else {
                    Self::classify(t)
                }
            }
            snapped => snapped,
        }
    }

    /// Whether the parameter lies on the closed interval `[0, 1]`.
    #[must_use]
    pub fn is_within(self) -> bool {
        !matches!(self, Self::Outside)
    }

    /// Whether the parameter snapped to an endpoint.
    #[must_use]
    pub fn is_end(self) -> bool {
        matches!(self, Self::Zero | Self::One)
    }

    /// Replaces `t` with the exact endpoint it snapped to, if any.
    #[must_use]
    pub fn snap(self, t: f64) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::One => 1.0,
            Self::Between | Self::Outside => t,
        }
    }
}
