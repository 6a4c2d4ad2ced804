use crate::common::{Real, Storable, Units, SPEED_OF_LIGHT};
use crate::spec::RadarSpec;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeVelocityAngle {
    /// m
    pub range_max: Real,
    /// m
    pub range_res: Real,
    /// km/h
    pub velocity_max: Real,
    /// km/h
    pub velocity_res: Real,
    /// degrees
    pub angular_res: Real,
}

/// Frequencies in GHz, bandwidth in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChirpFrequencyParams {
    pub start_freq: Real,
    pub center_freq: Real,
    pub end_freq: Real,
    pub bandwidth: Real,
}

/// All in µs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChirpTimingParams {
    pub dc_power_on_delay_time: Real,
    pub dwell_time: Real,
    pub settle_time: Real,
    pub acquisition_time: Real,
    pub reset_time: Real,
    pub jumpback_time: Real,
    pub idle_time: Real,
    pub chirp_time: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameParams {
    /// ms
    pub frame_time: Real,
    pub no_of_chirps: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Antennas {
    pub tx: Real,
    pub rx: Real,
}

/// Which obtained figures differ from the request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Relaxed {
    pub range_res: bool,
    pub range_max: bool,
    pub velocity_max: bool,
    pub angular_res: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultBundle {
    pub requested_params: RangeVelocityAngle,
    pub obtained_params: RangeVelocityAngle,
    pub chirp_frequency_params: ChirpFrequencyParams,
    pub chirp_timing_params: ChirpTimingParams,
    pub frame_params: FrameParams,
    pub antennas: Antennas,
    /// µs
    pub time_of_flight: Real,
    /// Kilobits per frame: sample count times RX channels, scaled by 1/1000.
    pub memory_required: Real,
    pub relaxed: Relaxed,
}

impl Storable for ResultBundle {}

impl RadarSpec {
    /// Round trip time (s) to the requested, not the obtained, maximum range.
    pub fn time_of_flight(&self) -> Real {
        (2.0 * self.range_max()) / SPEED_OF_LIGHT
    }

    pub fn memory_required(&self, no_of_chirps: Real, chirp_time: Real, nrx: Real) -> Real {
        no_of_chirps * (chirp_time / self.sampling_time()) * nrx
    }

    pub fn results(&self) -> ResultBundle {
        let range = self.range_plan();
        let sweep = self.sweep_frequencies(range.sweep_bandwidth);
        let velocity = self.velocity_plan();
        let timing = velocity.timing;
        let frame = self.frame_plan(timing.chirp);
        let antenna = self.antenna_plan();
        let memory = self.memory_required(frame.no_of_chirps, timing.chirp, antenna.rx);

        let velocity_res = self.velocity_res().kmh().value();

        ResultBundle {
            requested_params: RangeVelocityAngle {
                range_max: self.range_max(),
                range_res: self.range_res(),
                velocity_max: self.velocity_max(),
                velocity_res,
                angular_res: self.angular_res(),
            },
            obtained_params: RangeVelocityAngle {
                range_max: range.range_max.value(),
                range_res: range.range_res.value(),
                velocity_max: velocity.velocity_max.value(),
                velocity_res,
                angular_res: antenna.angular_res.value(),
            },
            chirp_frequency_params: ChirpFrequencyParams {
                start_freq: sweep.start / 1e9,
                center_freq: sweep.center(),
                end_freq: sweep.stop / 1e9,
                bandwidth: sweep.bandwidth / 1e6,
            },
            chirp_timing_params: ChirpTimingParams {
                dc_power_on_delay_time: timing.dc_power_on_delay * 1e6,
                dwell_time: timing.dwell * 1e6,
                settle_time: timing.settle * 1e6,
                acquisition_time: timing.acquisition * 1e6,
                reset_time: timing.reset * 1e6,
                jumpback_time: timing.jumpback * 1e6,
                idle_time: timing.idle * 1e6,
                chirp_time: timing.chirp * 1e6,
            },
            frame_params: FrameParams {
                frame_time: frame.frame_time,
                no_of_chirps: frame.no_of_chirps,
            },
            antennas: Antennas {
                tx: antenna.tx,
                rx: antenna.rx,
            },
            time_of_flight: self.time_of_flight() * 1e6,
            memory_required: memory / 1000.0,
            relaxed: Relaxed {
                range_res: range.range_res.is_relaxed(),
                range_max: range.range_max.is_relaxed(),
                velocity_max: velocity.velocity_max.is_relaxed(),
                angular_res: antenna.angular_res.is_relaxed(),
            },
        }
    }
}
