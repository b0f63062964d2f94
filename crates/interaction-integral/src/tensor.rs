//! Small dense tensor helpers for 3×3 quantities at a quadrature point.
//!
//! Second-order tensors are plain nalgebra `Matrix3<f64>` values; symmetric
//! stress and strain arrive in six-component form and are expanded here.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Full 3×3 second-order tensor
pub type Tensor3x3 = Matrix3<f64>;

/// Symmetric tensor components (xx, yy, zz, xy, yz, xz)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SymmetricTensor {
    /// Normal component XX
    pub xx: f64,
    /// Normal component YY
    pub yy: f64,
    /// Normal component ZZ
    pub zz: f64,
    /// Shear component XY
    pub xy: f64,
    /// Shear component YZ
    pub yz: f64,
    /// Shear component XZ
    pub xz: f64,
}

impl SymmetricTensor {
    /// Create from the six independent components
    pub fn new(xx: f64, yy: f64, zz: f64, xy: f64, yz: f64, xz: f64) -> Self {
        Self {
            xx,
            yy,
            zz,
            xy,
            yz,
            xz,
        }
    }

    /// Spherical tensor `value * I`
    pub fn isotropic(value: f64) -> Self {
        Self::new(value, value, value, 0.0, 0.0, 0.0)
    }

    /// Expand to the full symmetric matrix
    pub fn to_matrix(&self) -> Tensor3x3 {
        from_symmetric(self.xx, self.yy, self.zz, self.xy, self.yz, self.xz)
    }
}

impl From<SymmetricTensor> for Tensor3x3 {
    fn from(t: SymmetricTensor) -> Self {
        t.to_matrix()
    }
}

/// Build a full symmetric matrix by mirroring the off-diagonal components
pub fn from_symmetric(xx: f64, yy: f64, zz: f64, xy: f64, yz: f64, xz: f64) -> Tensor3x3 {
    Matrix3::new(
        xx, xy, xz, //
        xy, yy, yz, //
        xz, yz, zz,
    )
}

/// Standard matrix product `a * b`
pub fn multiply(a: &Tensor3x3, b: &Tensor3x3) -> Tensor3x3 {
    a * b
}

/// Double contraction `A : B = Σᵢⱼ A(i,j) B(i,j)`
pub fn double_contraction(a: &Tensor3x3, b: &Tensor3x3) -> f64 {
    a.dot(b)
}

/// Stack three vectors as the rows of a matrix
pub fn from_rows(r0: &Vector3<f64>, r1: &Vector3<f64>, r2: &Vector3<f64>) -> Tensor3x3 {
    Matrix3::from_rows(&[r0.transpose(), r1.transpose(), r2.transpose()])
}

/// Matrix whose row 0 is `row` and whose other rows are zero
pub fn first_row_only(row: &Vector3<f64>) -> Tensor3x3 {
    from_rows(row, &Vector3::zeros(), &Vector3::zeros())
}
