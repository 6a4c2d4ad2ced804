use crate::common::{Natural, Storable};
use crate::engine::ResultBundle;
use crate::error::{SpecError, SpecResult};
use crate::if_table::IfBandwidthRow;
use crate::spec::{RadarSpec, RequestedSpecs};

use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject NaN and infinities only
    #[default]
    Finite,
    /// Also reject non-positive figures and zero sample counts
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub samples: Natural,
    #[serde(flatten)]
    pub results: ResultBundle,
    pub if_bandwidth_table: Vec<IfBandwidthRow>,
}

impl Storable for ScenarioReport {}

impl From<&RadarSpec> for ScenarioReport {
    fn from(spec: &RadarSpec) -> Self {
        Self {
            samples: spec.acquisition_samples(),
            results: spec.results(),
            if_bandwidth_table: spec.if_bandwidth_table(),
        }
    }
}

/// Evaluates the same request once per acquisition-sample count, in the
/// given order. Input is validated once, before anything is computed.
pub fn run_scenarios(
    requested: &RequestedSpecs,
    samples: &[Natural],
    validation: Validation,
) -> SpecResult<Vec<ScenarioReport>> {
    if samples.is_empty() {
        return Err(SpecError::NoSamples);
    }

    match validation {
        Validation::Finite => requested.ensure_finite()?,
        Validation::Strict => {
            requested.ensure_physical()?;
            if samples.contains(&0) {
                return Err(SpecError::NoSamples);
            }
        }
    }

    Ok(samples
        .iter()
        .map(|&n| {
            let spec = RadarSpec::new(n, requested);
            let report = ScenarioReport::from(&spec);
            info!(
                samples = n,
                bandwidth_mhz = report.results.chirp_frequency_params.bandwidth,
                chirps = report.results.frame_params.no_of_chirps,
                "scenario evaluated"
            );
            report
        })
        .collect())
}
