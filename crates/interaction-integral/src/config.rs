//! Interaction integral configuration.
//!
//! The configuration names the auxiliary fields, the K-factor and, for a
//! crack front treated as 3D, the crack front point the q-function belongs
//! to. Everything is validated at setup so that no configuration problem
//! surfaces in the middle of an integration pass.

use std::fs;
use std::path::Path;

use crack_front::CrackFrontGeometry;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

fn default_k_factor() -> f64 {
    1.0
}

fn default_mesh_dimension() -> u8 {
    3
}

/// Interaction integral parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionIntegralConfig {
    /// Name of the auxiliary stress field
    pub aux_stress: String,
    /// Name of the auxiliary displacement field
    pub aux_disp: String,
    /// Name of the auxiliary displacement gradient field
    pub aux_grad_disp: String,
    /// Name of the auxiliary strain field
    pub aux_strain: String,
    /// Conversion factor between the interaction integral and K
    #[serde(default = "default_k_factor", rename = "K_factor", alias = "k_factor")]
    pub k_factor: f64,
    /// Crack front point the q-function belongs to (required in 3D)
    #[serde(default, alias = "crack_front_node_index")]
    pub crack_front_point_index: Option<usize>,
    /// Spatial dimension of the mesh (2 or 3)
    #[serde(default = "default_mesh_dimension")]
    pub mesh_dimension: u8,
}

impl InteractionIntegralConfig {
    /// Create a configuration with default K-factor and a 3D mesh
    pub fn new(
        aux_stress: impl Into<String>,
        aux_disp: impl Into<String>,
        aux_grad_disp: impl Into<String>,
        aux_strain: impl Into<String>,
    ) -> Self {
        Self {
            aux_stress: aux_stress.into(),
            aux_disp: aux_disp.into(),
            aux_grad_disp: aux_grad_disp.into(),
            aux_strain: aux_strain.into(),
            k_factor: default_k_factor(),
            crack_front_point_index: None,
            mesh_dimension: default_mesh_dimension(),
        }
    }

    pub fn with_k_factor(mut self, k_factor: f64) -> Self {
        self.k_factor = k_factor;
        self
    }

    pub fn with_crack_front_point_index(mut self, index: usize) -> Self {
        self.crack_front_point_index = Some(index);
        self
    }

    pub fn with_mesh_dimension(mut self, dimension: u8) -> Self {
        self.mesh_dimension = dimension;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check field names, K-factor and mesh dimension
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (parameter, name) in self.field_names() {
            if !is_valid_field_name(name) {
                return Err(ConfigError::MalformedFieldName {
                    parameter,
                    name: name.to_string(),
                });
            }
        }
        if !self.k_factor.is_finite() {
            return Err(ConfigError::InvalidKFactor(self.k_factor));
        }
        if !matches!(self.mesh_dimension, 2 | 3) {
            return Err(ConfigError::InvalidMeshDimension(self.mesh_dimension));
        }
        Ok(())
    }

    /// Configured auxiliary field names keyed by parameter name
    pub fn field_names(&self) -> [(&'static str, &str); 4] {
        [
            ("aux_stress", self.aux_stress.as_str()),
            ("aux_disp", self.aux_disp.as_str()),
            ("aux_grad_disp", self.aux_grad_disp.as_str()),
            ("aux_strain", self.aux_strain.as_str()),
        ]
    }

    /// Crack front point used for rotations and segment lengths.
    ///
    /// A front treated as 2D has a single point, so any configured index is
    /// ignored with a warning. A 3D front requires the index.
    pub fn resolve_location<G: CrackFrontGeometry + ?Sized>(
        &self,
        geometry: &G,
    ) -> std::result::Result<usize, ConfigError> {
        if geometry.is_treated_as_2d() {
            if let Some(index) = self.crack_front_point_index {
                tracing::warn!(
                    index,
                    "crack_front_point_index ignored because the crack front is treated as 2D"
                );
            }
            Ok(0)
        } else {
            self.crack_front_point_index
                .ok_or(ConfigError::MissingCrackFrontIndex)
        }
    }
}

fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
