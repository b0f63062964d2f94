//! Interaction integral integrand at a single quadrature point.
//!
//! With `dq` the rank-1 matrix carrying the crack-direction derivative of q
//! in its first row, and all primary quantities rotated into the local
//! crack-front frame:
//!
//! ```text
//! term1 = aux_du₁ : (dq · σ)
//! term2 = Σₖ (dq · σᵃᵘˣ)(0,k) · ∇u(k,0)
//! term3 = dq(0,0) · (σᵃᵘˣ : ε)
//! I     = term1 + term2 − term3
//! ```
//!
//! `aux_du₁` is the first row of the auxiliary displacement gradient. The
//! auxiliary fields are already expressed in crack-front coordinates and are
//! not rotated.

use crack_front::CrackFrontGeometry;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tensor::{self, SymmetricTensor, Tensor3x3};
use crate::transform::CrackFrontTransform;

/// Field samples at one quadrature point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrandInputs {
    /// Gradient of the q weighting function
    pub grad_q: Vector3<f64>,
    /// Stress
    pub stress: SymmetricTensor,
    /// Elastic strain
    pub elastic_strain: SymmetricTensor,
    /// Gradients of the x, y and z displacement components (zero z row in 2D)
    pub grad_disp: [Vector3<f64>; 3],
    /// Auxiliary stress in crack-front coordinates
    pub aux_stress: Tensor3x3,
    /// Auxiliary displacement gradient in crack-front coordinates
    pub aux_grad_disp: Tensor3x3,
    /// Auxiliary strain in crack-front coordinates
    pub aux_strain: Tensor3x3,
}

impl Default for IntegrandInputs {
    fn default() -> Self {
        Self {
            grad_q: Vector3::zeros(),
            stress: SymmetricTensor::default(),
            elastic_strain: SymmetricTensor::default(),
            grad_disp: [Vector3::zeros(); 3],
            aux_stress: Tensor3x3::zeros(),
            aux_grad_disp: Tensor3x3::zeros(),
            aux_strain: Tensor3x3::zeros(),
        }
    }
}

impl IntegrandInputs {
    /// Displacement gradient with row `i` holding ∇uᵢ
    pub fn grad_disp_matrix(&self) -> Tensor3x3 {
        tensor::from_rows(&self.grad_disp[0], &self.grad_disp[1], &self.grad_disp[2])
    }
}

/// The three integrand terms before they are combined
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrandTerms {
    pub term1: f64,
    pub term2: f64,
    pub term3: f64,
}

impl IntegrandTerms {
    /// `term1 + term2 − term3`
    pub fn value(&self) -> f64 {
        self.term1 + self.term2 - self.term3
    }
}

/// Crack front point whose frame is used for an evaluation.
///
/// A front treated as 2D has a single frame, so the requested index plays
/// no part there.
pub fn effective_location<G: CrackFrontGeometry + ?Sized>(geometry: &G, location: usize) -> usize {
    if geometry.is_treated_as_2d() { 0 } else { location }
}

/// Compute the individual integrand terms at one quadrature point
pub fn integrand_terms<G: CrackFrontGeometry + ?Sized>(
    geometry: &G,
    inputs: &IntegrandInputs,
    location: usize,
) -> Result<IntegrandTerms> {
    let location = effective_location(geometry, location);
    let transform = CrackFrontTransform::new(geometry);

    // In crack front coordinates the propagation direction is (1, 0, 0)
    let crack_direction: Vector3<f64> = Vector3::x();

    let aux_du = tensor::first_row_only(&inputs.aux_grad_disp.row(0).transpose());
    let stress = inputs.stress.to_matrix();
    let strain = inputs.elastic_strain.to_matrix();
    let grad_disp = inputs.grad_disp_matrix();

    let grad_q_cf = transform.rotate_to_local(&inputs.grad_q, location)?;
    let grad_disp_cf = transform.rotate_to_local(&grad_disp, location)?;
    let stress_cf = transform.rotate_to_local(&stress, location)?;
    let strain_cf = transform.rotate_to_local(&strain, location)?;

    let dq = tensor::first_row_only(&(grad_q_cf * crack_direction[0]));

    let tmp1 = tensor::multiply(&dq, &stress_cf);
    let term1 = tensor::double_contraction(&aux_du, &tmp1);

    // Only the first column of the displacement gradient participates
    let tmp2 = tensor::multiply(&dq, &inputs.aux_stress);
    let term2 = grad_disp_cf[(0, 0)] * tmp2[(0, 0)]
        + grad_disp_cf[(1, 0)] * tmp2[(0, 1)]
        + grad_disp_cf[(2, 0)] * tmp2[(0, 2)];

    let term3 = dq[(0, 0)] * tensor::double_contraction(&inputs.aux_stress, &strain_cf);

    Ok(IntegrandTerms {
        term1,
        term2,
        term3,
    })
}

/// Unnormalized interaction integral integrand at one quadrature point.
///
/// # Arguments
/// * `geometry` - Crack front model providing the local frame
/// * `inputs` - Field samples at the quadrature point (global coordinates)
/// * `location` - Crack front point index; ignored for a front treated as 2D
///
/// # Returns
/// `term1 + term2 - term3`, not yet weighted by `JxW`
///
/// # Errors
/// Fails only when `location` is out of range for a front treated as 3D.
pub fn evaluate_integrand<G: CrackFrontGeometry + ?Sized>(
    geometry: &G,
    inputs: &IntegrandInputs,
    location: usize,
) -> Result<f64> {
    Ok(integrand_terms(geometry, inputs, location)?.value())
}
