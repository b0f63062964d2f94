//! Error types for crack-front geometry

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CrackFrontError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrackFrontError {
    #[error("Crack front has no points")]
    EmptyFront,

    #[error("A crack front treated as 2D needs exactly one point, got {0}")]
    PointCountFor2D(usize),

    #[error("A crack front treated as 3D needs at least two points, got {0}")]
    PointCountFor3D(usize),

    #[error("Crack front point index {index} out of range (front has {len} points)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Degenerate tangent at crack front point {0} (coincident neighbours?)")]
    DegenerateTangent(usize),

    #[error("Crack direction at point {0} is parallel to the crack front tangent")]
    DegenerateDirection(usize),

    #[error("Segment lengths are undefined for a crack front treated as 2D")]
    SegmentLengthIn2D,
}
