//! Error types for interaction integral evaluation

use crack_front::CrackFrontError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntegralError>;

/// Setup-time configuration problems; raised before any quadrature work
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("crack_front_point_index must be specified when the crack front is treated as 3D")]
    MissingCrackFrontIndex,

    #[error("Malformed field name for {parameter}: {name:?}")]
    MalformedFieldName { parameter: &'static str, name: String },

    #[error("No field named {name:?} is registered (requested by {parameter})")]
    UnknownField { parameter: &'static str, name: String },

    #[error("Field {0} is required for a {1}-dimensional mesh")]
    MissingPrimaryField(&'static str, u8),

    #[error("K_factor must be finite, got {0}")]
    InvalidKFactor(f64),

    #[error("Mesh dimension must be 2 or 3, got {0}")]
    InvalidMeshDimension(u8),

    #[error("Fields were resolved for a {fields}-dimensional mesh but the integral is configured for {config}")]
    MeshDimensionMismatch { config: u8, fields: u8 },
}

#[derive(Error, Debug)]
pub enum IntegralError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Crack front error: {0}")]
    CrackFront(#[from] CrackFrontError),

    #[error("Field {field} has no sample for quadrature point {qp}")]
    MissingSample { field: &'static str, qp: usize },

    #[error("Integral already finalized; reset before accumulating again")]
    AlreadyFinalized,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
