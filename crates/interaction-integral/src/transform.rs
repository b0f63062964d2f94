//! Rotation of quadrature-point quantities into crack-front coordinates.

use crack_front::{CrackFrontGeometry, Rotatable};

use crate::error::Result;

/// Global-to-local transform backed by a crack front model.
///
/// Local axis 0 is the crack propagation direction at the requested point.
pub struct CrackFrontTransform<'a, G: CrackFrontGeometry + ?Sized> {
    geometry: &'a G,
}

impl<'a, G: CrackFrontGeometry + ?Sized> CrackFrontTransform<'a, G> {
    pub fn new(geometry: &'a G) -> Self {
        Self { geometry }
    }

    /// Rotate a vector or tensor into the frame of crack front point `index`.
    ///
    /// Vectors transform as `R v`, tensors as `R M Rᵀ`.
    ///
    /// # Errors
    /// Returns a crack front error when `index` is out of range.
    pub fn rotate_to_local<T: Rotatable>(&self, quantity: &T, index: usize) -> Result<T> {
        let rotation = self.geometry.rotation_for(index)?;
        Ok(rotation.to_local(quantity))
    }

    /// Inverse of [`rotate_to_local`](Self::rotate_to_local)
    pub fn rotate_to_global<T: Rotatable>(&self, quantity: &T, index: usize) -> Result<T> {
        let rotation = self.geometry.rotation_for(index)?;
        Ok(rotation.to_global(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegralError;
    use approx::assert_relative_eq;
    use crack_front::{CrackDirectionMethod, CrackFrontDefinition, FrontTreatment};
    use nalgebra::{Matrix3, Vector3};

    fn tilted_front() -> CrackFrontDefinition {
        CrackFrontDefinition::build(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 1.0),
                Vector3::new(0.5, 2.0, 2.5),
            ],
            CrackDirectionMethod::Vector(Vector3::new(1.0, 0.2, -0.3)),
            FrontTreatment::Treat3D,
        )
        .unwrap()
    }

    #[test]
    fn round_trip_reproduces_tensor() {
        let front = tilted_front();
        let transform = CrackFrontTransform::new(&front);
        let m = Matrix3::new(3.0, -1.0, 0.5, 2.0, 4.0, 1.5, -0.5, 0.25, 6.0);
        for index in 0..3 {
            let local = transform.rotate_to_local(&m, index).unwrap();
            let back = transform.rotate_to_global(&local, index).unwrap();
            assert_relative_eq!(back, m, epsilon = 1e-12);
        }
    }

    #[test]
    fn vector_and_tensor_share_the_rotation() {
        let front = tilted_front();
        let transform = CrackFrontTransform::new(&front);
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 1.0);
        // (a ⊗ b) rotated equals (R a) ⊗ (R b)
        let outer = transform.rotate_to_local(&(a * b.transpose()), 1).unwrap();
        let ra = transform.rotate_to_local(&a, 1).unwrap();
        let rb = transform.rotate_to_local(&b, 1).unwrap();
        assert_relative_eq!(outer, ra * rb.transpose(), epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_index_propagates() {
        let front = tilted_front();
        let transform = CrackFrontTransform::new(&front);
        let err = transform.rotate_to_local(&Vector3::<f64>::x(), 3).unwrap_err();
        assert!(matches!(err, IntegralError::CrackFront(_)));
    }
}
