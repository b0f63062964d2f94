//! Interaction integral evaluation along a crack front.
//!
//! The interaction integral combines the computed solution with an auxiliary
//! (reference) field to extract mixed-mode stress intensity factors. This
//! crate evaluates its integrand at quadrature points in crack-front
//! coordinates, accumulates weighted contributions per mesh partition, and
//! reduces them across partitions into one normalized, K-scaled value per
//! crack front point.
//!
//! ```
//! use crack_front::{CrackDirectionMethod, CrackFrontDefinition, FrontTreatment};
//! use interaction_integral::{evaluate_integrand, IntegrandInputs, SymmetricTensor};
//! use nalgebra::{Matrix3, Vector3};
//!
//! let front = CrackFrontDefinition::build(
//!     vec![Vector3::zeros()],
//!     CrackDirectionMethod::Vector(Vector3::x()),
//!     FrontTreatment::planar(),
//! )
//! .unwrap();
//!
//! let inputs = IntegrandInputs {
//!     grad_q: Vector3::new(1.0, 0.0, 0.0),
//!     stress: SymmetricTensor::isotropic(1.0),
//!     aux_stress: Matrix3::identity(),
//!     aux_grad_disp: Matrix3::identity(),
//!     ..Default::default()
//! };
//! let value = evaluate_integrand(&front, &inputs, 0).unwrap();
//! assert!((value - 1.0).abs() < 1e-12);
//! ```

pub mod accumulator;
pub mod comm;
pub mod config;
pub mod driver;
pub mod error;
pub mod fields;
pub mod integral;
pub mod integrand;
pub mod tensor;
pub mod transform;

pub use accumulator::{segment_normalization, IntegralAccumulator};
pub use comm::{Communicator, SerialCommunicator, ThreadCommunicator, ThreadGroup};
pub use config::InteractionIntegralConfig;
pub use driver::{integrate_partition, QuadraturePoint};
pub use error::{ConfigError, IntegralError, Result};
pub use fields::{
    FieldRegistry, FieldSet, FnField, PrimaryFields, QuadratureField, SampledField,
    UniformField,
};
pub use integral::InteractionIntegral;
pub use integrand::{evaluate_integrand, integrand_terms, IntegrandInputs, IntegrandTerms};
pub use tensor::{SymmetricTensor, Tensor3x3};
pub use transform::CrackFrontTransform;
