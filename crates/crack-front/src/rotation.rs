//! Global-to-local rotations for crack-front coordinate frames.
//!
//! A crack-front frame has three orthonormal axes:
//! - axis 0: crack propagation direction
//! - axis 1: crack plane normal
//! - axis 2: crack front tangent
//!
//! The rotation matrix stores these axes (expressed in global coordinates)
//! as its rows, so `R * v` gives the local components of a global vector and
//! `R * M * Rᵀ` the local components of a global second-order tensor.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Orthonormal rotation from global to crack-front coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationOperator {
    matrix: Matrix3<f64>,
}

impl RotationOperator {
    /// Build from the three local axes expressed in global coordinates.
    ///
    /// The axes are expected to be unit length and mutually orthogonal.
    pub fn from_axes(
        crack_direction: Vector3<f64>,
        plane_normal: Vector3<f64>,
        tangent: Vector3<f64>,
    ) -> Self {
        Self {
            matrix: Matrix3::from_rows(&[
                crack_direction.transpose(),
                plane_normal.transpose(),
                tangent.transpose(),
            ]),
        }
    }

    /// Identity frame: local axes coincide with global x, y, z
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Underlying rotation matrix (rows are the local axes)
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Local crack propagation direction in global coordinates
    pub fn crack_direction(&self) -> Vector3<f64> {
        self.matrix.row(0).transpose()
    }

    /// Local crack plane normal in global coordinates
    pub fn plane_normal(&self) -> Vector3<f64> {
        self.matrix.row(1).transpose()
    }

    /// Local crack front tangent in global coordinates
    pub fn tangent(&self) -> Vector3<f64> {
        self.matrix.row(2).transpose()
    }

    /// Rotate a global quantity into the local frame
    pub fn to_local<T: Rotatable>(&self, quantity: &T) -> T {
        quantity.rotated(&self.matrix)
    }

    /// Rotate a local quantity back into the global frame
    pub fn to_global<T: Rotatable>(&self, quantity: &T) -> T {
        quantity.rotated(&self.matrix.transpose())
    }
}

/// Quantities that transform under a change of orthonormal basis
pub trait Rotatable: Sized {
    /// Apply rotation `r` to this quantity
    fn rotated(&self, r: &Matrix3<f64>) -> Self;
}

impl Rotatable for Vector3<f64> {
    fn rotated(&self, r: &Matrix3<f64>) -> Self {
        r * self
    }
}

impl Rotatable for Matrix3<f64> {
    fn rotated(&self, r: &Matrix3<f64>) -> Self {
        r * self * r.transpose()
    }
}
