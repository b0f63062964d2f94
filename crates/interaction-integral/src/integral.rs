//! Interaction integral for one crack front point.
//!
//! Ties together the validated configuration, the resolved field set, the
//! crack front model and the accumulator. Setup performs every check that
//! can fail for configuration reasons, so an integration pass only fails on
//! misuse (accumulating after finalize) or a field without a sample for a
//! requested quadrature point.

use crack_front::CrackFrontGeometry;

use crate::accumulator::{segment_normalization, IntegralAccumulator};
use crate::comm::Communicator;
use crate::config::InteractionIntegralConfig;
use crate::error::{ConfigError, Result};
use crate::fields::FieldSet;
use crate::integrand::{self, IntegrandInputs};

pub struct InteractionIntegral<'a, G: CrackFrontGeometry + ?Sized> {
    geometry: &'a G,
    fields: FieldSet,
    location: usize,
    accumulator: IntegralAccumulator,
}

impl<'a, G: CrackFrontGeometry + ?Sized> InteractionIntegral<'a, G> {
    /// Validate the configuration against the crack front and set up an
    /// empty accumulator.
    ///
    /// # Errors
    /// - `ConfigError::MissingCrackFrontIndex` for a 3D front without an index
    /// - a crack front error if the index is out of range
    /// - `ConfigError::MeshDimensionMismatch` if `fields` was resolved for
    ///   another mesh dimension
    /// - any validation error of the configuration
    pub fn new(
        config: &InteractionIntegralConfig,
        geometry: &'a G,
        fields: FieldSet,
    ) -> Result<Self> {
        config.validate()?;
        if fields.mesh_dimension() != config.mesh_dimension {
            return Err(ConfigError::MeshDimensionMismatch {
                config: config.mesh_dimension,
                fields: fields.mesh_dimension(),
            }
            .into());
        }
        let location = config.resolve_location(geometry)?;
        geometry.rotation_for(location)?;
        let segment_factor = segment_normalization(geometry, location)?;

        Ok(Self {
            geometry,
            fields,
            location,
            accumulator: IntegralAccumulator::new(segment_factor, config.k_factor),
        })
    }

    /// Crack front point this integral is evaluated for
    pub fn location(&self) -> usize {
        self.location
    }

    pub fn accumulator(&self) -> &IntegralAccumulator {
        &self.accumulator
    }

    /// Integrand for explicitly supplied field samples
    pub fn evaluate(&self, inputs: &IntegrandInputs) -> Result<f64> {
        integrand::evaluate_integrand(self.geometry, inputs, self.location)
    }

    /// Integrand at quadrature point `qp`, sampled from the field set
    pub fn compute_qp_integral(&self, qp: usize) -> Result<f64> {
        self.evaluate(&self.fields.gather(qp)?)
    }

    /// Add a weighted contribution to this partition's running total
    pub fn accumulate(&mut self, contribution: f64) -> Result<()> {
        self.accumulator.accumulate(contribution)
    }

    /// Collective reduction; see [`IntegralAccumulator::finalize`]
    pub fn finalize<C: Communicator + ?Sized>(&mut self, comm: &C) -> Result<f64> {
        self.accumulator.finalize(comm)
    }

    /// Prepare for another integration pass
    pub fn reset(&mut self) {
        self.accumulator.reset();
    }
}
