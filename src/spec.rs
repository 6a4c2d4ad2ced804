use crate::common::{
    Loadable, MetersPerSecond, Natural, Real, Storable, Units, SAMPLING_FREQ, SPEED_OF_LIGHT,
};
use crate::error::{SpecError, SpecResult};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// The six user-requested figures, as typed into the calculator.
///
/// Velocities are in km/h, ranges in m, angular resolution in degrees and
/// the start frequency in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestedSpecs {
    pub range_res: Real,
    pub range_max: Real,
    pub velocity_max: Real,
    pub velocity_res: Real,
    pub angular_res: Real,
    pub frequency: Real,
}

impl Loadable for RequestedSpecs {}
impl Storable for RequestedSpecs {}

impl RequestedSpecs {
    fn fields(&self) -> [(&'static str, Real); 6] {
        [
            ("range_res", self.range_res),
            ("range_max", self.range_max),
            ("velocity_max", self.velocity_max),
            ("velocity_res", self.velocity_res),
            ("angular_res", self.angular_res),
            ("frequency", self.frequency),
        ]
    }

    pub fn ensure_finite(&self) -> SpecResult<()> {
        match self.fields().iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(SpecError::InvalidInput { field }),
            None => Ok(()),
        }
    }

    /// Finite and strictly positive in every field. Not required by the
    /// derivations, which happily produce infinite or negative figures.
    pub fn ensure_physical(&self) -> SpecResult<()> {
        self.ensure_finite()?;
        match self.fields().iter().find(|(_, value)| *value <= 0.0) {
            Some(&(field, value)) => Err(SpecError::NonPhysical { field, value }),
            None => Ok(()),
        }
    }
}

/// Requested specs for one acquisition-sample count, together with the
/// quantities every derivation shares. Fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSpec {
    acquisition_samples: Natural,

    range_res: Real,
    range_max: Real,
    velocity_max: Real,
    velocity_res: MetersPerSecond,
    angular_res: Real,
    frequency: Real,

    sampling_time: Real,
    acquisition_time: Real,
    wavelength: Real,
    antenna_spacing: Real,
}

impl RadarSpec {
    pub fn new(acquisition_samples: Natural, requested: &RequestedSpecs) -> Self {
        let sampling_time = 1.0 / SAMPLING_FREQ;
        let acquisition_time = acquisition_samples as Real * sampling_time;
        let wavelength = SPEED_OF_LIGHT / requested.frequency;

        trace!(
            acquisition_samples,
            sampling_time,
            acquisition_time,
            wavelength,
            "derived quantities"
        );

        Self {
            acquisition_samples,
            range_res: requested.range_res,
            range_max: requested.range_max,
            velocity_max: requested.velocity_max,
            velocity_res: requested.velocity_res.kmh().mps(),
            angular_res: requested.angular_res,
            frequency: requested.frequency,
            sampling_time,
            acquisition_time,
            wavelength,
            antenna_spacing: wavelength / 2.0,
        }
    }

    /// Like `new`, but refuses non-finite input instead of propagating it.
    pub fn try_new(acquisition_samples: Natural, requested: &RequestedSpecs) -> SpecResult<Self> {
        requested.ensure_finite()?;
        Ok(Self::new(acquisition_samples, requested))
    }

    /// `try_new` plus positivity of every field and a non-zero sample count.
    pub fn strict(acquisition_samples: Natural, requested: &RequestedSpecs) -> SpecResult<Self> {
        if acquisition_samples == 0 {
            return Err(SpecError::NoSamples);
        }
        requested.ensure_physical()?;
        Ok(Self::new(acquisition_samples, requested))
    }

    pub fn acquisition_samples(&self) -> Natural {
        self.acquisition_samples
    }

    pub fn range_res(&self) -> Real {
        self.range_res
    }

    pub fn range_max(&self) -> Real {
        self.range_max
    }

    /// km/h
    pub fn velocity_max(&self) -> Real {
        self.velocity_max
    }

    pub fn velocity_res(&self) -> MetersPerSecond {
        self.velocity_res
    }

    pub fn angular_res(&self) -> Real {
        self.angular_res
    }

    pub fn frequency(&self) -> Real {
        self.frequency
    }

    pub fn sampling_time(&self) -> Real {
        self.sampling_time
    }

    pub fn acquisition_time(&self) -> Real {
        self.acquisition_time
    }

    pub fn wavelength(&self) -> Real {
        self.wavelength
    }

    pub fn antenna_spacing(&self) -> Real {
        self.antenna_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn requested() -> RequestedSpecs {
        RequestedSpecs {
            range_res: 1.0,
            range_max: 200.0,
            velocity_max: 60.0,
            velocity_res: 5.0,
            angular_res: 2.0,
            frequency: 77e9,
        }
    }

    #[test]
    fn derived_quantities() {
        let spec = RadarSpec::new(1024, &requested());

        assert_relative_eq!(spec.sampling_time(), 25e-9, max_relative = 1e-12);
        assert_relative_eq!(spec.acquisition_time(), 25.6e-6, max_relative = 1e-12);
        assert_relative_eq!(spec.wavelength(), 3.8961038961e-3, max_relative = 1e-9);
        assert_relative_eq!(spec.antenna_spacing(), spec.wavelength() / 2.0);
    }

    #[test]
    fn velocity_res_is_stored_in_mps() {
        let spec = RadarSpec::new(512, &requested());
        assert_relative_eq!(spec.velocity_res().value(), 5.0 * 5.0 / 18.0, max_relative = 1e-12);
    }

    #[test]
    fn zero_frequency_propagates_as_infinite_wavelength() {
        let spec = RadarSpec::new(
            1024,
            &RequestedSpecs {
                frequency: 0.0,
                ..requested()
            },
        );
        assert!(spec.wavelength().is_infinite());
    }

    #[test]
    fn non_finite_field_is_named() {
        let bad = RequestedSpecs {
            velocity_max: Real::NAN,
            ..requested()
        };
        match RadarSpec::try_new(1024, &bad) {
            Err(SpecError::InvalidInput { field }) => assert_eq!(field, "velocity_max"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn strict_rejects_non_positive_and_zero_samples() {
        let negative = RequestedSpecs {
            range_max: -5.0,
            ..requested()
        };
        match RadarSpec::strict(1024, &negative) {
            Err(SpecError::NonPhysical { field, value }) => {
                assert_eq!(field, "range_max");
                assert_eq!(value, -5.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            RadarSpec::strict(0, &requested()),
            Err(SpecError::NoSamples)
        ));
        assert!(RadarSpec::strict(2048, &requested()).is_ok());
    }

    #[test]
    fn requested_specs_from_json() {
        let json = r#"{
            "range_res": 1.0, "range_max": 200.0, "velocity_max": 60.0,
            "velocity_res": 5.0, "angular_res": 2.0, "frequency": 77e9
        }"#;
        let parsed: RequestedSpecs = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, requested());
    }
}
