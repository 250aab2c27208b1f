use super::param::ParamPair;

/// How two finite segments relate.
///
/// Exactly one variant describes any pair of segments. Parameter pairs hold
/// `t` on the first segment and `u` on the second. Two-pair variants are
/// ordered by increasing `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionKind {
    /// The segments cross at interior points of both.
    Intersecting(ParamPair),
    /// An endpoint of each segment meets.
    IntersectingEndsBoth(ParamPair),
    /// An endpoint of the first segment touches the interior of the second.
    IntersectingEndsFirst(ParamPair),
    /// An endpoint of the second segment touches the interior of the first.
    IntersectingEndsSecond(ParamPair),
    /// 3D only: the closest points are interior to both segments but the
    /// lines pass each other at a distance.
    Skew(ParamPair),
    /// The segments do not meet; carries their closest points.
    Apart(ParamPair),

    /// Parallel on distinct lines. Carries the middle of the shared run when
    /// the segments face each other, otherwise their nearest ends.
    Parallel(ParamPair),
    /// Collinear and sharing a run of positive length.
    Overlapping { start: ParamPair, end: ParamPair },
    /// Collinear with a gap between them; carries the ends facing the gap.
    CoincidentApart(ParamPair),
    /// Collinear, same orientation, meeting end to start.
    Continuation(ParamPair),
    /// Collinear, opposite orientation, meeting at a shared endpoint.
    ContinuationFlipped(ParamPair),
    /// Collinear covering the same extent in the same direction.
    Identical { start: ParamPair, end: ParamPair },
    /// Collinear covering the same extent in opposite directions.
    IdenticalFlipped { start: ParamPair, end: ParamPair },

    TooShortA,
    TooShortB,
    TooShortBoth,
}

impl IntersectionKind {
    /// The classification obtained by swapping the two segments.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::Intersecting(p) => Self::Intersecting(p.swapped()),
            Self::IntersectingEndsBoth(p) => Self::IntersectingEndsBoth(p.swapped()),
            Self::IntersectingEndsFirst(p) => Self::IntersectingEndsSecond(p.swapped()),
            Self::IntersectingEndsSecond(p) => Self::IntersectingEndsFirst(p.swapped()),
            Self::Skew(p) => Self::Skew(p.swapped()),
            Self::Apart(p) => Self::Apart(p.swapped()),
            Self::Parallel(p) => Self::Parallel(p.swapped()),
            Self::CoincidentApart(p) => Self::CoincidentApart(p.swapped()),
            Self::Continuation(p) => Self::Continuation(p.swapped()),
            Self::ContinuationFlipped(p) => Self::ContinuationFlipped(p.swapped()),
            Self::Overlapping { start, end } => {
                let (start, end) = ordered(start.swapped(), end.swapped());
                Self::Overlapping { start, end }
            }
            Self::Identical { start, end } => {
                let (start, end) = ordered(start.swapped(), end.swapped());
                Self::Identical { start, end }
            }
            Self::IdenticalFlipped { start, end } => {
                let (start, end) = ordered(start.swapped(), end.swapped());
                Self::IdenticalFlipped { start, end }
            }
            Self::TooShortA => Self::TooShortB,
            Self::TooShortB => Self::TooShortA,
            Self::TooShortBoth => Self::TooShortBoth,
        }
    }

    /// Every parameter pair carried by the variant.
    #[must_use]
    pub fn params(&self) -> Vec<ParamPair> {
        match *self {
            Self::Intersecting(p)
            | Self::IntersectingEndsBoth(p)
            | Self::IntersectingEndsFirst(p)
            | Self::IntersectingEndsSecond(p)
            | Self::Skew(p)
            | Self::Apart(p)
            | Self::Parallel(p)
            | Self::CoincidentApart(p)
            | Self::Continuation(p)
            | Self::ContinuationFlipped(p) => vec![p],
            Self::Overlapping { start, end }
            | Self::Identical { start, end }
            | Self::IdenticalFlipped { start, end } => vec![start, end],
            Self::TooShortA | Self::TooShortB | Self::TooShortBoth => Vec::new(),
        }
    }

    /// Whether the segments cross at a single point of both lines.
    #[must_use]
    pub fn is_intersecting(&self) -> bool {
        matches!(
            self,
            Self::Intersecting(_)
                | Self::IntersectingEndsBoth(_)
                | Self::IntersectingEndsFirst(_)
                | Self::IntersectingEndsSecond(_)
        )
    }

    /// Whether the segments share at least one point.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.is_intersecting()
            || matches!(
                self,
                Self::Overlapping { .. }
                    | Self::Continuation(_)
                    | Self::ContinuationFlipped(_)
                    | Self::Identical { .. }
                    | Self::IdenticalFlipped { .. }
            )
    }

    /// Whether the directions were found parallel.
    #[must_use]
    pub fn is_parallel_family(&self) -> bool {
        matches!(
            self,
            Self::Parallel(_)
                | Self::Overlapping { .. }
                | Self::CoincidentApart(_)
                | Self::Continuation(_)
                | Self::ContinuationFlipped(_)
                | Self::Identical { .. }
                | Self::IdenticalFlipped { .. }
        )
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::TooShortA | Self::TooShortB | Self::TooShortBoth)
    }
}

fn ordered(a: ParamPair, b: ParamPair) -> (ParamPair, ParamPair) {
    if b.t < a.t {
        (b, a)
    } else {
        (a, b)
    }
}
