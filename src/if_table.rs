use crate::common::{Real, SPEED_OF_LIGHT};
use crate::spec::RadarSpec;

use ndarray::Array1;
use serde::Serialize;

/// Chirp bandwidth sweep of the table (MHz), both ends inclusive.
pub const CHIRP_BANDWIDTH_START: Real = 200.0;
pub const CHIRP_BANDWIDTH_STOP: Real = 2000.0;
pub const CHIRP_BANDWIDTH_STEP: Real = 100.0;

/// One row of the table, both columns in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IfBandwidthRow {
    pub chirp_bandwidth: Real,
    pub if_bandwidth: Real,
}

pub fn chirp_bandwidths() -> Array1<Real> {
    Array1::range(
        CHIRP_BANDWIDTH_START,
        CHIRP_BANDWIDTH_STOP + CHIRP_BANDWIDTH_STEP / 2.0,
        CHIRP_BANDWIDTH_STEP,
    )
}

impl RadarSpec {
    /// IF bandwidth (MHz) a chirp of the given bandwidth (MHz) needs to see
    /// a target at the requested maximum range.
    pub fn if_bandwidth_required(&self, chirp_bandwidth: Real) -> Real {
        let if_bandwidth = (2.0 * self.range_max() * chirp_bandwidth * 1e6)
            / (SPEED_OF_LIGHT * self.acquisition_time());
        if_bandwidth / 1e6
    }

    pub fn if_bandwidth_table(&self) -> Vec<IfBandwidthRow> {
        chirp_bandwidths()
            .iter()
            .map(|&chirp_bandwidth| IfBandwidthRow {
                chirp_bandwidth,
                if_bandwidth: self.if_bandwidth_required(chirp_bandwidth),
            })
            .collect()
    }
}
