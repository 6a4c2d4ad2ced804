use crate::common::{
    Obtained, Real, Units, DC_POWER_ON_DELAY_TIME, DWELL_TIME, JUMPBACK_TIME, RESET_TIME,
    SETTLE_TIME,
};
use crate::spec::RadarSpec;

use tracing::debug;

/// km/h per m/s
const KMH_PER_MPS: Real = 3.6;

/// Per-chirp segment durations (s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChirpTiming {
    pub dc_power_on_delay: Real,
    pub dwell: Real,
    pub settle: Real,
    pub acquisition: Real,
    pub reset: Real,
    pub jumpback: Real,
    /// Negative when the requested velocity asks for a chirp shorter than
    /// the fixed segments allow. Not clamped.
    pub idle: Real,
    pub chirp: Real,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityPlan {
    pub timing: ChirpTiming,
    /// km/h
    pub velocity_max: Obtained<Real>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    /// Whole chirps, kept as a float so degenerate input stays visible.
    pub no_of_chirps: Real,
    /// ms
    pub frame_time: Real,
}

impl RadarSpec {
    /// Shortest chirp the fixed timing budget allows: no idle time.
    pub fn chirp_time_min(&self) -> Real {
        self.acquisition_time() + DWELL_TIME + SETTLE_TIME + RESET_TIME + JUMPBACK_TIME
    }

    /// Unambiguous velocity (km/h) for a given chirp time.
    pub fn velocity_for_chirp_time(&self, chirp_time: Real) -> Real {
        (self.wavelength() * KMH_PER_MPS) / (4.0 * chirp_time)
    }

    pub fn velocity_plan(&self) -> VelocityPlan {
        let chirp_time_min = self.chirp_time_min();
        let ceiling = self.velocity_for_chirp_time(chirp_time_min);

        let (chirp, idle, velocity_max) = if self.velocity_max() > ceiling {
            debug!(
                requested = self.velocity_max(),
                ceiling, "maximum velocity capped by the minimum chirp time"
            );
            let chirp = chirp_time_min;
            (
                chirp,
                0.0,
                Obtained::Relaxed(self.velocity_for_chirp_time(chirp)),
            )
        } else {
            let chirp = (self.wavelength() * KMH_PER_MPS) / (4.0 * self.velocity_max());
            let idle = chirp
                - (DWELL_TIME + SETTLE_TIME + self.acquisition_time() + RESET_TIME + JUMPBACK_TIME);
            debug!(chirp, idle, "chirp stretched with idle time");
            (chirp, idle, Obtained::Requested(self.velocity_max()))
        };

        VelocityPlan {
            timing: ChirpTiming {
                dc_power_on_delay: DC_POWER_ON_DELAY_TIME,
                dwell: DWELL_TIME,
                settle: SETTLE_TIME,
                acquisition: self.acquisition_time(),
                reset: RESET_TIME,
                jumpback: JUMPBACK_TIME,
                idle,
                chirp,
            },
            velocity_max,
        }
    }

    pub fn frame_plan(&self, chirp_time: Real) -> FramePlan {
        let no_of_chirps =
            (self.wavelength() / (2.0 * self.velocity_res().value() * chirp_time)).floor();
        FramePlan {
            no_of_chirps,
            frame_time: no_of_chirps * chirp_time * 1000.0,
        }
    }
}
