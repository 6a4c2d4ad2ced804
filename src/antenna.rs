use crate::common::{as_count, Natural, Obtained, Real, N_RX_MAX, N_TX_MAX};
use crate::spec::RadarSpec;

use num::traits::FloatConst;
use tracing::debug;

/// Angle off boresight (rad) the resolution is evaluated at.
const BORESIGHT: Real = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntennaPlan {
    /// degrees
    pub angular_res: Obtained<Real>,
    pub tx: Real,
    pub rx: Real,
}

impl AntennaPlan {
    pub fn counts(&self) -> Option<(Natural, Natural)> {
        Some((as_count(self.tx)?, as_count(self.rx)?))
    }
}

impl RadarSpec {
    /// Finest angular resolution (degrees) of the full TX x RX virtual array.
    pub fn angular_res_best(&self) -> Real {
        self.wavelength()
            / (self.antenna_spacing()
                * N_TX_MAX as Real
                * N_RX_MAX as Real
                * Real::cos(BORESIGHT)
                * (Real::PI() / 180.0))
    }

    /// Virtual-array size needed for the requested angular resolution.
    pub fn antenna_product(&self) -> Real {
        (self.wavelength()
            / (self.antenna_spacing()
                * self.angular_res()
                * (Real::PI() / 180.0)
                * Real::cos(BORESIGHT)))
        .floor()
    }

    pub fn antenna_plan(&self) -> AntennaPlan {
        let best = self.angular_res_best();

        if self.angular_res() < best {
            debug!(
                requested = self.angular_res(),
                best, "angular resolution limited by the largest array"
            );
            AntennaPlan {
                angular_res: Obtained::Relaxed(best),
                tx: N_TX_MAX as Real,
                rx: N_RX_MAX as Real,
            }
        } else {
            // Square array: TX and RX share the product evenly
            let side = self.antenna_product().sqrt().ceil();
            AntennaPlan {
                angular_res: Obtained::Requested(self.angular_res()),
                tx: side,
                rx: side,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::RequestedSpecs;
    use approx::assert_relative_eq;

    fn spec(angular_res: Real) -> RadarSpec {
        RadarSpec::new(
            1024,
            &RequestedSpecs {
                range_res: 1.0,
                range_max: 200.0,
                velocity_max: 60.0,
                velocity_res: 5.0,
                angular_res,
                frequency: 77e9,
            },
        )
    }

    #[test]
    fn best_resolution_is_independent_of_frequency() {
        // 2 / (64 * pi / 180) degrees
        let expected = 2.0 / (64.0 * Real::PI() / 180.0);
        assert_relative_eq!(spec(2.0).angular_res_best(), expected, max_relative = 1e-12);
    }

    #[test]
    fn too_fine_uses_full_array() {
        let plan = spec(1.0).antenna_plan();

        assert!(plan.angular_res.is_relaxed());
        assert_relative_eq!(plan.angular_res.value(), spec(1.0).angular_res_best());
        assert_eq!(plan.counts(), Some((8, 8)));
    }

    #[test]
    fn achievable_resolution_uses_square_array() {
        // 2 / (10 * pi / 180) = 11.46 -> 11 -> ceil(sqrt(11)) = 4
        let plan = spec(10.0).antenna_plan();

        assert_eq!(plan.angular_res, Obtained::Requested(10.0));
        assert_eq!(spec(10.0).antenna_product(), 11.0);
        assert_eq!(plan.counts(), Some((4, 4)));
    }

    #[test]
    fn product_comes_from_requested_resolution() {
        // 2 / (2 * pi / 180) = 57.3 -> 57 -> 8
        let s = spec(2.0);
        assert_eq!(s.antenna_product(), 57.0);
        assert_eq!(s.antenna_plan().counts(), Some((8, 8)));
        assert!(!s.antenna_plan().angular_res.is_relaxed());
    }

    #[test]
    fn very_coarse_resolution_needs_no_array() {
        let plan = spec(500.0).antenna_plan();
        assert_eq!(plan.counts(), Some((0, 0)));
    }
}
