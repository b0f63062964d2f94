//! Running sum of weighted integrand contributions and its final reduction.

use crack_front::CrackFrontGeometry;

use crate::comm::Communicator;
use crate::error::{IntegralError, Result};

/// Divisor turning the summed integral into a per-unit-length value.
///
/// In 3D this is the average of the forward and backward segment lengths at
/// `location`; a front treated as 2D uses 1.
pub fn segment_normalization<G: CrackFrontGeometry + ?Sized>(
    geometry: &G,
    location: usize,
) -> Result<f64> {
    if geometry.is_treated_as_2d() {
        return Ok(1.0);
    }
    let forward = geometry.forward_segment_length(location)?;
    let backward = geometry.backward_segment_length(location)?;
    Ok((forward + backward) / 2.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Accumulating,
    Finalized(f64),
}

/// Partition-local running total with a one-shot global finalize
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralAccumulator {
    local_sum: f64,
    segment_factor: f64,
    k_factor: f64,
    state: State,
}

impl IntegralAccumulator {
    /// Create an empty accumulator.
    ///
    /// `segment_factor` is the divisor from [`segment_normalization`];
    /// `k_factor` scales the normalized global sum.
    pub fn new(segment_factor: f64, k_factor: f64) -> Self {
        Self {
            local_sum: 0.0,
            segment_factor,
            k_factor,
            state: State::Accumulating,
        }
    }

    /// Add one weighted quadrature-point contribution (integrand × JxW)
    pub fn accumulate(&mut self, contribution: f64) -> Result<()> {
        match self.state {
            State::Accumulating => {
                self.local_sum += contribution;
                Ok(())
            }
            State::Finalized(_) => Err(IntegralError::AlreadyFinalized),
        }
    }

    /// Partition-local total so far
    pub fn local_sum(&self) -> f64 {
        self.local_sum
    }

    /// Finalized value, if [`finalize`](Self::finalize) has run
    pub fn value(&self) -> Option<f64> {
        match self.state {
            State::Finalized(v) => Some(v),
            State::Accumulating => None,
        }
    }

    /// Sum across partitions, normalize by the segment factor and scale by K.
    ///
    /// This is a collective call: every partition must reach it. It may be
    /// called once per pass; call [`reset`](Self::reset) before the next one.
    pub fn finalize<C: Communicator + ?Sized>(&mut self, comm: &C) -> Result<f64> {
        if let State::Finalized(_) = self.state {
            return Err(IntegralError::AlreadyFinalized);
        }

        let global = comm.sum_all(self.local_sum);
        let value = self.k_factor * global / self.segment_factor;
        tracing::debug!(
            rank = comm.rank(),
            global_sum = global,
            segment_factor = self.segment_factor,
            k_factor = self.k_factor,
            value,
            "interaction integral finalized"
        );

        self.state = State::Finalized(value);
        Ok(value)
    }

    /// Clear the running total for a new integration pass
    pub fn reset(&mut self) {
        self.local_sum = 0.0;
        self.state = State::Accumulating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comm::SerialCommunicator;
    use approx::assert_relative_eq;
    use crack_front::{CrackDirectionMethod, CrackFrontDefinition, FrontTreatment};
    use nalgebra::Vector3;

    #[test]
    fn three_d_divides_by_average_segment_length() {
        // Backward 4.0, forward 2.0 at point 1
        let front = CrackFrontDefinition::build(
            vec![Vector3::zeros(), Vector3::z() * 4.0, Vector3::z() * 6.0],
            CrackDirectionMethod::Vector(Vector3::x()),
            FrontTreatment::Treat3D,
        )
        .unwrap();
        assert_relative_eq!(segment_normalization(&front, 1).unwrap(), 3.0);

        let mut acc = IntegralAccumulator::new(segment_normalization(&front, 1).unwrap(), 1.0);
        acc.accumulate(9.0).unwrap();
        assert_relative_eq!(acc.finalize(&SerialCommunicator).unwrap(), 3.0);
    }

    #[test]
    fn planar_front_does_not_divide() {
        let front = CrackFrontDefinition::build(
            vec![Vector3::zeros()],
            CrackDirectionMethod::Vector(Vector3::x()),
            FrontTreatment::planar(),
        )
        .unwrap();
        assert_eq!(segment_normalization(&front, 0).unwrap(), 1.0);
        assert_eq!(segment_normalization(&front, 42).unwrap(), 1.0);
    }

    #[test]
    fn k_factor_scales_normalized_sum() {
        let mut acc = IntegralAccumulator::new(1.0, 2.0);
        acc.accumulate(2.0).unwrap();
        acc.accumulate(3.0).unwrap();
        assert_eq!(acc.local_sum(), 5.0);
        assert_eq!(acc.finalize(&SerialCommunicator).unwrap(), 10.0);
        assert_eq!(acc.value(), Some(10.0));
    }

    #[test]
    fn finalize_is_one_shot() {
        let mut acc = IntegralAccumulator::new(1.0, 1.0);
        acc.accumulate(1.0).unwrap();
        acc.finalize(&SerialCommunicator).unwrap();
        assert!(matches!(
            acc.finalize(&SerialCommunicator),
            Err(IntegralError::AlreadyFinalized)
        ));
        assert!(matches!(acc.accumulate(1.0), Err(IntegralError::AlreadyFinalized)));
    }

    #[test]
    fn reset_starts_a_new_pass() {
        let mut acc = IntegralAccumulator::new(1.0, 1.0);
        acc.accumulate(4.0).unwrap();
        acc.finalize(&SerialCommunicator).unwrap();
        acc.reset();
        assert_eq!(acc.value(), None);
        acc.accumulate(1.5).unwrap();
        assert_eq!(acc.finalize(&SerialCommunicator).unwrap(), 1.5);
    }
}
