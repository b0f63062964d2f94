//! Crack-front model: per-point local frames and segment lengths.
//!
//! The front is an ordered sequence of points. In 3D treatment every point
//! gets its own frame built from the local tangent and the requested crack
//! direction; in 2D treatment there is a single point whose tangent is the
//! out-of-plane axis.

use crate::error::{CrackFrontError, Result};
use crate::rotation::RotationOperator;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

const DEGENERATE_TOL: f64 = 1e-12;

/// Read-only geometry queries used by crack-front integrals.
///
/// Implementations are immutable after construction and may be shared
/// between partitions without locking.
pub trait CrackFrontGeometry: Send + Sync {
    /// Whether the whole front is treated as a single 2D point
    fn is_treated_as_2d(&self) -> bool;

    /// Number of points along the crack front
    fn num_points(&self) -> usize;

    /// Distance to the next point along the front (3D only)
    fn forward_segment_length(&self, index: usize) -> Result<f64>;

    /// Distance to the previous point along the front (3D only)
    fn backward_segment_length(&self, index: usize) -> Result<f64>;

    /// Global-to-local rotation at a crack front point
    fn rotation_for(&self, index: usize) -> Result<&RotationOperator>;
}

/// How the local crack propagation direction is chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackDirectionMethod {
    /// Fixed global direction, projected onto the plane normal to the tangent
    Vector(Vector3<f64>),
    /// Direction from the crack mouth toward each front point
    CrackMouth(Vector3<f64>),
}

/// 2D or 3D treatment of the crack front
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontTreatment {
    /// Single point; `axis` is the out-of-plane direction used as the tangent
    #[serde(rename = "treat_2d")]
    Treat2D { axis: Vector3<f64> },
    /// Full 3D front with at least two points
    #[serde(rename = "treat_3d")]
    Treat3D,
}

impl FrontTreatment {
    /// 2D treatment with z as the out-of-plane axis
    pub fn planar() -> Self {
        FrontTreatment::Treat2D {
            axis: Vector3::z(),
        }
    }
}

/// Serializable description of a crack front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackFrontConfig {
    /// Ordered crack front point coordinates
    pub points: Vec<Vector3<f64>>,
    /// Crack direction method
    pub direction: CrackDirectionMethod,
    /// 2D or 3D treatment
    pub treatment: FrontTreatment,
}

impl CrackFrontConfig {
    /// Build the crack front model described by this configuration
    pub fn build(&self) -> Result<CrackFrontDefinition> {
        CrackFrontDefinition::build(self.points.clone(), self.direction, self.treatment)
    }
}

/// Concrete crack front with precomputed frames and segment lengths
#[derive(Debug, Clone, PartialEq)]
pub struct CrackFrontDefinition {
    points: Vec<Vector3<f64>>,
    treat_as_2d: bool,
    rotations: Vec<RotationOperator>,
    forward_lengths: Vec<f64>,
    backward_lengths: Vec<f64>,
}

impl CrackFrontDefinition {
    /// Compute frames and segment lengths for an ordered set of points.
    ///
    /// # Errors
    /// Fails when the point count does not fit the treatment, when
    /// neighbouring points coincide, or when the crack direction is parallel
    /// to the tangent at some point.
    pub fn build(
        points: Vec<Vector3<f64>>,
        direction: CrackDirectionMethod,
        treatment: FrontTreatment,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(CrackFrontError::EmptyFront);
        }

        match treatment {
            FrontTreatment::Treat2D { axis } => {
                if points.len() != 1 {
                    return Err(CrackFrontError::PointCountFor2D(points.len()));
                }
                let tangent = axis
                    .try_normalize(DEGENERATE_TOL)
                    .ok_or(CrackFrontError::DegenerateTangent(0))?;
                let rotation = frame_at(0, &points[0], &tangent, &direction)?;
                Ok(Self {
                    points,
                    treat_as_2d: true,
                    rotations: vec![rotation],
                    forward_lengths: Vec::new(),
                    backward_lengths: Vec::new(),
                })
            }
            FrontTreatment::Treat3D => {
                let n = points.len();
                if n < 2 {
                    return Err(CrackFrontError::PointCountFor3D(n));
                }

                let segments: Vec<Vector3<f64>> =
                    points.windows(2).map(|pair| pair[1] - pair[0]).collect();

                let mut forward_lengths = vec![0.0; n];
                let mut backward_lengths = vec![0.0; n];
                for (i, seg) in segments.iter().enumerate() {
                    let len = seg.norm();
                    if len <= DEGENERATE_TOL {
                        return Err(CrackFrontError::DegenerateTangent(i));
                    }
                    forward_lengths[i] = len;
                    backward_lengths[i + 1] = len;
                }

                let mut rotations = Vec::with_capacity(n);
                for i in 0..n {
                    let mut tangent = Vector3::zeros();
                    if i > 0 {
                        tangent += segments[i - 1] / backward_lengths[i];
                    }
                    if i + 1 < n {
                        tangent += segments[i] / forward_lengths[i];
                    }
                    let tangent = tangent
                        .try_normalize(DEGENERATE_TOL)
                        .ok_or(CrackFrontError::DegenerateTangent(i))?;
                    rotations.push(frame_at(i, &points[i], &tangent, &direction)?);
                }

                Ok(Self {
                    points,
                    treat_as_2d: false,
                    rotations,
                    forward_lengths,
                    backward_lengths,
                })
            }
        }
    }

    /// Crack front point coordinates
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// Total length of the crack front (0 for a 2D front)
    pub fn front_length(&self) -> f64 {
        self.forward_lengths.iter().sum()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(CrackFrontError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}

impl CrackFrontGeometry for CrackFrontDefinition {
    fn is_treated_as_2d(&self) -> bool {
        self.treat_as_2d
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn forward_segment_length(&self, index: usize) -> Result<f64> {
        if self.treat_as_2d {
            return Err(CrackFrontError::SegmentLengthIn2D);
        }
        self.check_index(index)?;
        Ok(self.forward_lengths[index])
    }

    fn backward_segment_length(&self, index: usize) -> Result<f64> {
        if self.treat_as_2d {
            return Err(CrackFrontError::SegmentLengthIn2D);
        }
        self.check_index(index)?;
        Ok(self.backward_lengths[index])
    }

    fn rotation_for(&self, index: usize) -> Result<&RotationOperator> {
        self.rotations
            .get(index)
            .ok_or(CrackFrontError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }
}

/// Local frame at one crack front point given its unit tangent
fn frame_at(
    index: usize,
    point: &Vector3<f64>,
    tangent: &Vector3<f64>,
    direction: &CrackDirectionMethod,
) -> Result<RotationOperator> {
    let raw = match direction {
        CrackDirectionMethod::Vector(v) => *v,
        CrackDirectionMethod::CrackMouth(mouth) => point - mouth,
    };

    // Remove the tangential part so the direction lies in the normal plane
    let crack_direction = (raw - tangent * raw.dot(tangent))
        .try_normalize(DEGENERATE_TOL)
        .ok_or(CrackFrontError::DegenerateDirection(index))?;
    let plane_normal = tangent.cross(&crack_direction);

    Ok(RotationOperator::from_axes(
        crack_direction,
        plane_normal,
        *tangent,
    ))
}
