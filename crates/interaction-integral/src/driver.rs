//! Partition-local integration over quadrature points.
//!
//! The host mesh code supplies each quadrature point's index into the field
//! set together with its `JxW` weight (Jacobian determinant times quadrature
//! weight). Integrand evaluation runs in parallel with Rayon; contributions
//! are then accumulated in point order so the local sum does not depend on
//! thread scheduling.

use crack_front::CrackFrontGeometry;
use rayon::prelude::*;

use crate::error::Result;
use crate::integral::InteractionIntegral;

/// Quadrature point reference with its integration weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    /// Index into the field set
    pub index: usize,
    /// Jacobian determinant times quadrature weight
    pub jxw: f64,
}

impl QuadraturePoint {
    pub fn new(index: usize, jxw: f64) -> Self {
        Self { index, jxw }
    }
}

/// Evaluate and accumulate all quadrature points of one partition.
///
/// Returns the weighted sum added by this call. If any point fails, the
/// error is returned and nothing is accumulated.
pub fn integrate_partition<G: CrackFrontGeometry + ?Sized>(
    integral: &mut InteractionIntegral<'_, G>,
    points: &[QuadraturePoint],
) -> Result<f64> {
    let shared = &*integral;
    let contributions: Vec<f64> = points
        .par_iter()
        .map(|qp| -> Result<f64> { Ok(shared.compute_qp_integral(qp.index)? * qp.jxw) })
        .collect::<Result<Vec<f64>>>()?;

    let mut added = 0.0;
    for contribution in contributions {
        integral.accumulate(contribution)?;
        added += contribution;
    }
    Ok(added)
}
