/// A parameter on the first line (`t`) paired with one on the second (`u`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParamPair {
    pub t: f64,
    pub u: f64,
}

impl ParamPair {
    #[must_use]
    pub fn new(t: f64, u: f64) -> Self {
        Self { t, u }
    }

    /// The same pair seen from the other line.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            t: self.u,
            u: self.t,
        }
    }
}

/// How two infinite lines relate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionParam {
    /// Parameters of closest approach. In 2D this is the intersection; in 3D
    /// the feet of the common perpendicular. Both are unbounded.
    TwoParam(ParamPair),
    /// Directions parallel within tolerance, lines distinct.
    Parallel,
    /// Parallel and on the same infinite line.
    Coincident,
    /// The first line is too short to have a direction.
    TooShortA,
    /// The second line is too short to have a direction.
    TooShortB,
    /// Both lines are too short.
    TooShortBoth,
}

impl IntersectionParam {
    /// The relation obtained by swapping the two lines.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::TwoParam(pair) => Self::TwoParam(pair.swapped()),
            Self::TooShortA => Self::TooShortB,
            Self::TooShortB => Self::TooShortA,
            other @ (Self::Parallel | Self::Coincident | Self::TooShortBoth) => other,
        }
    }

    /// Whether either line was too short to classify.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        matches!(self, Self::TooShortA | Self::TooShortB | Self::TooShortBoth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_swaps_parameters_and_degeneracy() {
        let p = IntersectionParam::TwoParam(ParamPair::new(0.25, 3.0));
        assert_eq!(p.mirrored(), IntersectionParam::TwoParam(ParamPair::new(3.0, 0.25)));
        assert_eq!(IntersectionParam::TooShortA.mirrored(), IntersectionParam::TooShortB);
        assert_eq!(IntersectionParam::Coincident.mirrored(), IntersectionParam::Coincident);
        assert_eq!(p.mirrored().mirrored(), p);
    }

    #[test]
    fn degeneracy_predicate() {
        assert!(IntersectionParam::TooShortBoth.is_degenerate());
        assert!(!IntersectionParam::Parallel.is_degenerate());
    }
}
