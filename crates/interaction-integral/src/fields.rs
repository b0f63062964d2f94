//! Typed access to quadrature-point field samples.
//!
//! Auxiliary fields are registered under names chosen by the host
//! simulation. [`FieldSet::resolve`] looks every configured name up once at
//! setup; evaluation then works with typed handles only.

use std::collections::HashMap;
use std::sync::Arc;

use nalgebra::Vector3;

use crate::config::InteractionIntegralConfig;
use crate::error::{ConfigError, IntegralError, Result};
use crate::integrand::IntegrandInputs;
use crate::tensor::{SymmetricTensor, Tensor3x3};

/// Per-quadrature-point sample source.
///
/// Repeated queries for the same point within one integration pass must
/// return the same value. `None` means the field has no sample for `qp`.
pub trait QuadratureField<T>: Send + Sync {
    fn value_at(&self, qp: usize) -> Option<T>;
}

/// Field backed by a table of precomputed samples, indexed by quadrature point
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField<T> {
    samples: Vec<T>,
}

impl<T> SampledField<T> {
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<T: Copy + Send + Sync> QuadratureField<T> for SampledField<T> {
    fn value_at(&self, qp: usize) -> Option<T> {
        self.samples.get(qp).copied()
    }
}

/// Field computed on demand by a closure
pub struct FnField<F>(pub F);

impl<T, F> QuadratureField<T> for FnField<F>
where
    F: Fn(usize) -> T + Send + Sync,
{
    fn value_at(&self, qp: usize) -> Option<T> {
        Some((self.0)(qp))
    }
}

/// Constant field, the same value at every quadrature point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformField<T>(pub T);

impl<T: Copy + Send + Sync> QuadratureField<T> for UniformField<T> {
    fn value_at(&self, _qp: usize) -> Option<T> {
        Some(self.0)
    }
}

pub type VectorFieldRef = Arc<dyn QuadratureField<Vector3<f64>>>;
pub type SymmetricFieldRef = Arc<dyn QuadratureField<SymmetricTensor>>;
pub type TensorFieldRef = Arc<dyn QuadratureField<Tensor3x3>>;

/// Named tensor-valued fields provided by the host (auxiliary solutions)
#[derive(Default, Clone)]
pub struct FieldRegistry {
    tensors: HashMap<String, TensorFieldRef>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tensor field, replacing any previous field of that name
    pub fn register(&mut self, name: impl Into<String>, field: TensorFieldRef) {
        self.tensors.insert(name.into(), field);
    }

    pub fn get(&self, name: &str) -> Option<&TensorFieldRef> {
        self.tensors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tensors.contains_key(name)
    }

    fn lookup(
        &self,
        parameter: &'static str,
        name: &str,
    ) -> std::result::Result<TensorFieldRef, ConfigError> {
        self.tensors
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownField {
                parameter,
                name: name.to_string(),
            })
    }
}

/// Solution fields of the actual (computed) problem
#[derive(Clone)]
pub struct PrimaryFields {
    pub grad_q: VectorFieldRef,
    pub stress: SymmetricFieldRef,
    pub elastic_strain: SymmetricFieldRef,
    pub grad_disp_x: VectorFieldRef,
    pub grad_disp_y: VectorFieldRef,
    /// Absent on 2-dimensional meshes
    pub grad_disp_z: Option<VectorFieldRef>,
}

/// Every field the integrand needs, resolved to typed handles
#[derive(Clone)]
pub struct FieldSet {
    mesh_dimension: u8,
    primary: PrimaryFields,
    aux_stress: TensorFieldRef,
    aux_disp: TensorFieldRef,
    aux_grad_disp: TensorFieldRef,
    aux_strain: TensorFieldRef,
}

impl FieldSet {
    /// Bind configured field names to registered fields.
    ///
    /// On a 2-dimensional mesh any z displacement gradient is dropped so the
    /// third displacement-gradient row is zero; a 3-dimensional mesh must
    /// supply it.
    pub fn resolve(
        config: &InteractionIntegralConfig,
        registry: &FieldRegistry,
        mut primary: PrimaryFields,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        match config.mesh_dimension {
            2 => primary.grad_disp_z = None,
            dim => {
                if primary.grad_disp_z.is_none() {
                    return Err(ConfigError::MissingPrimaryField("grad_disp_z", dim));
                }
            }
        }

        Ok(Self {
            mesh_dimension: config.mesh_dimension,
            primary,
            aux_stress: registry.lookup("aux_stress", &config.aux_stress)?,
            aux_disp: registry.lookup("aux_disp", &config.aux_disp)?,
            aux_grad_disp: registry.lookup("aux_grad_disp", &config.aux_grad_disp)?,
            aux_strain: registry.lookup("aux_strain", &config.aux_strain)?,
        })
    }

    /// Mesh dimension the set was resolved for
    pub fn mesh_dimension(&self) -> u8 {
        self.mesh_dimension
    }

    /// Sample every field at one quadrature point
    pub fn gather(&self, qp: usize) -> Result<IntegrandInputs> {
        let p = &self.primary;
        let grad_disp_z = match &p.grad_disp_z {
            Some(field) => sample(&**field, "grad_disp_z", qp)?,
            None => Vector3::zeros(),
        };

        Ok(IntegrandInputs {
            grad_q: sample(&*p.grad_q, "grad_q", qp)?,
            stress: sample(&*p.stress, "stress", qp)?,
            elastic_strain: sample(&*p.elastic_strain, "elastic_strain", qp)?,
            grad_disp: [
                sample(&*p.grad_disp_x, "grad_disp_x", qp)?,
                sample(&*p.grad_disp_y, "grad_disp_y", qp)?,
                grad_disp_z,
            ],
            aux_stress: sample(&*self.aux_stress, "aux_stress", qp)?,
            aux_grad_disp: sample(&*self.aux_grad_disp, "aux_grad_disp", qp)?,
            aux_strain: sample(&*self.aux_strain, "aux_strain", qp)?,
        })
    }

    /// Auxiliary displacement at a quadrature point
    pub fn aux_disp(&self, qp: usize) -> Result<Tensor3x3> {
        sample(&*self.aux_disp, "aux_disp", qp)
    }
}

fn sample<T, F>(field: &F, name: &'static str, qp: usize) -> Result<T>
where
    F: QuadratureField<T> + ?Sized,
{
    field
        .value_at(qp)
        .ok_or(IntegralError::MissingSample { field: name, qp })
}
