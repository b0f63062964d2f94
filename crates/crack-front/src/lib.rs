//! Crack-front geometry for fracture integrals.
//!
//! Provides the read-only [`CrackFrontGeometry`] query interface and a
//! concrete [`CrackFrontDefinition`] that derives local frames and segment
//! lengths from crack front point coordinates.

pub mod error;
pub mod geometry;
pub mod rotation;

pub use error::{CrackFrontError, Result};
pub use geometry::{
    CrackDirectionMethod, CrackFrontConfig, CrackFrontDefinition, CrackFrontGeometry,
    FrontTreatment,
};
pub use rotation::{Rotatable, RotationOperator};
