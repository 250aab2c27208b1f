mod line_intersect;
mod segment_intersect;

pub use line_intersect::LineLineIntersect;
pub use segment_intersect::SegmentSegmentIntersect;
