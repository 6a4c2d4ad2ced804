mod antenna;
mod bandwidth;
mod common;
mod engine;
mod error;
mod if_table;
mod scenario;
mod spec;
mod timing;

pub use antenna::AntennaPlan;
pub use bandwidth::{RangePlan, SweepFrequencies, IF_BANDWIDTH};
pub use common::*;
pub use engine::{
    Antennas, ChirpFrequencyParams, ChirpTimingParams, FrameParams, RangeVelocityAngle, Relaxed,
    ResultBundle,
};
pub use error::{SpecError, SpecResult};
pub use if_table::{chirp_bandwidths, IfBandwidthRow};
pub use scenario::{run_scenarios, ScenarioReport, Validation};
pub use spec::{RadarSpec, RequestedSpecs};
pub use timing::{ChirpTiming, FramePlan, VelocityPlan};
