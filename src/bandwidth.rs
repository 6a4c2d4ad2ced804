use crate::common::{Obtained, Real, SAMPLING_FREQ, SPEED_OF_LIGHT};
use crate::spec::RadarSpec;

use tracing::debug;

/// Beat signals above this are lost. Half the IF sampling rate.
pub const IF_BANDWIDTH: Real = SAMPLING_FREQ / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePlan {
    /// Hz
    pub sweep_bandwidth: Real,
    pub range_res: Obtained<Real>,
    pub range_max: Obtained<Real>,
}

/// All in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepFrequencies {
    pub start: Real,
    pub stop: Real,
    pub bandwidth: Real,
}

impl SweepFrequencies {
    /// GHz
    pub fn center(&self) -> Real {
        (self.start / 1e9) + (self.bandwidth / 2e9)
    }
}

impl RadarSpec {
    /// Sweep bandwidths needed to reach the requested maximum range and the
    /// requested range resolution, in that order.
    pub fn required_bandwidth(&self) -> (Real, Real) {
        let for_range_max =
            (IF_BANDWIDTH * SPEED_OF_LIGHT * self.acquisition_time()) / (2.0 * self.range_max());
        let for_range_res = SPEED_OF_LIGHT / (2.0 * self.range_res());
        (for_range_max, for_range_res)
    }

    pub fn range_plan(&self) -> RangePlan {
        let (for_range_max, for_range_res) = self.required_bandwidth();

        if for_range_res > for_range_max {
            let sweep_bandwidth = for_range_max;
            debug!(
                requested = self.range_res(),
                sweep_bandwidth, "range resolution relaxed to fit the IF bandwidth"
            );
            RangePlan {
                sweep_bandwidth,
                range_res: Obtained::Relaxed(SPEED_OF_LIGHT / (2.0 * sweep_bandwidth)),
                range_max: Obtained::Requested(self.range_max()),
            }
        } else {
            let sweep_bandwidth = for_range_res;
            let range_max =
                (IF_BANDWIDTH * SPEED_OF_LIGHT * self.acquisition_time()) / (2.0 * sweep_bandwidth);
            debug!(
                requested = self.range_max(),
                range_max, sweep_bandwidth, "maximum range follows the sweep bandwidth"
            );
            RangePlan {
                sweep_bandwidth,
                range_res: Obtained::Requested(self.range_res()),
                // Equal requirements land here with range_max unchanged
                range_max: if range_max == self.range_max() {
                    Obtained::Requested(range_max)
                } else {
                    Obtained::Relaxed(range_max)
                },
            }
        }
    }

    pub fn sweep_frequencies(&self, sweep_bandwidth: Real) -> SweepFrequencies {
        SweepFrequencies {
            start: self.frequency(),
            stop: self.frequency() + sweep_bandwidth,
            bandwidth: sweep_bandwidth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::RequestedSpecs;
    use approx::assert_relative_eq;

    fn spec(range_res: Real, range_max: Real) -> RadarSpec {
        RadarSpec::new(
            1024,
            &RequestedSpecs {
                range_res,
                range_max,
                velocity_max: 60.0,
                velocity_res: 5.0,
                angular_res: 2.0,
                frequency: 77e9,
            },
        )
    }

    #[test]
    fn required_bandwidths() {
        let (for_range_max, for_range_res) = spec(1.0, 200.0).required_bandwidth();
        assert_relative_eq!(for_range_max, 384e6, max_relative = 1e-9);
        assert_relative_eq!(for_range_res, 150e6, max_relative = 1e-9);
    }

    #[test]
    fn coarse_resolution_relaxes_range_max() {
        let plan = spec(1.0, 200.0).range_plan();

        assert_relative_eq!(plan.sweep_bandwidth, 150e6, max_relative = 1e-9);
        assert_eq!(plan.range_res, Obtained::Requested(1.0));
        assert!(plan.range_max.is_relaxed());
        assert_relative_eq!(plan.range_max.value(), 512.0, max_relative = 1e-9);
    }

    #[test]
    fn fine_resolution_is_relaxed() {
        let plan = spec(0.1, 200.0).range_plan();

        assert_relative_eq!(plan.sweep_bandwidth, 384e6, max_relative = 1e-9);
        assert!(plan.range_res.is_relaxed());
        assert_relative_eq!(plan.range_res.value(), 0.390625, max_relative = 1e-9);
        assert_eq!(plan.range_max, Obtained::Requested(200.0));
    }

    #[test]
    fn equal_requirements_keep_both_requests() {
        // 384 MHz either way: c / (2 * 384e6) m
        let range_res = SPEED_OF_LIGHT / (2.0 * 384e6);
        let s = spec(range_res, 200.0);
        let (for_range_max, for_range_res) = s.required_bandwidth();
        assert_eq!(for_range_res, for_range_max);

        let plan = s.range_plan();
        assert_eq!(plan.range_res, Obtained::Requested(range_res));
        assert_eq!(plan.range_max, Obtained::Requested(200.0));
        assert_eq!(plan.sweep_bandwidth, for_range_res);
    }

    #[test]
    fn sweep_frequencies_in_hz_and_center_in_ghz() {
        let s = spec(1.0, 200.0);
        let sweep = s.sweep_frequencies(150e6);

        assert_eq!(sweep.start, 77e9);
        assert_relative_eq!(sweep.stop, 77.15e9, max_relative = 1e-12);
        assert_relative_eq!(sweep.center(), 77.075, max_relative = 1e-12);
    }
}
