use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use num::{Num, ToPrimitive};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub type Real = f64;
pub type Natural = u64;

/// IF sampling rate (Hz). Everything downstream assumes IF_max = 40 MHz.
pub const SAMPLING_FREQ: Real = 40e6;
pub const SPEED_OF_LIGHT: Real = 3e8;

pub const N_TX_MAX: Natural = 8;
pub const N_RX_MAX: Natural = 8;

// Fixed chirp timing budget (s)
pub const DWELL_TIME: Real = 2e-6;
pub const SETTLE_TIME: Real = 1e-6;
pub const RESET_TIME: Real = 1e-6;
pub const JUMPBACK_TIME: Real = 0.3e-6;
pub const DC_POWER_ON_DELAY_TIME: Real = 2e-6;

/// Acquisition-sample counts evaluated when none are given.
pub const ACQUISITION_SAMPLES: [Natural; 3] = [512, 1024, 2048];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KilometersPerHour(Real);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MetersPerSecond(Real);

impl From<KilometersPerHour> for MetersPerSecond {
    fn from(kmh: KilometersPerHour) -> Self {
        Self(kmh.0 * (5.0 / 18.0))
    }
}

impl From<MetersPerSecond> for KilometersPerHour {
    fn from(mps: MetersPerSecond) -> Self {
        Self(mps.0 * (18.0 / 5.0))
    }
}

macro_rules! impl_from_primitive_for {
    ($V: ty) => {
        impl<T: Num + ToPrimitive> From<T> for $V {
            #[inline]
            fn from(value: T) -> Self {
                Self(value.to_f64().unwrap_or(Real::NAN))
            }
        }
    };
}

impl_from_primitive_for!(KilometersPerHour);
impl_from_primitive_for!(MetersPerSecond);

impl From<KilometersPerHour> for Real {
    fn from(kmh: KilometersPerHour) -> Self {
        kmh.0
    }
}

impl From<MetersPerSecond> for Real {
    fn from(mps: MetersPerSecond) -> Self {
        mps.0
    }
}

/// `5.0.kmh()` tags a bare number, `speed.mps()` converts between units.
pub trait Units {
    fn kmh(self) -> KilometersPerHour;

    fn mps(self) -> MetersPerSecond;

    fn value(self) -> Real;
}

impl<T: Into<KilometersPerHour> + Into<MetersPerSecond> + Into<Real>> Units for T {
    fn kmh(self) -> KilometersPerHour {
        self.into()
    }

    fn mps(self) -> MetersPerSecond {
        self.into()
    }

    fn value(self) -> Real {
        self.into()
    }
}

/// Outcome of a trade-off: either the requested figure was achievable, or
/// it had to be relaxed to the given value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Obtained<T> {
    Requested(T),
    Relaxed(T),
}

impl<T: Copy> Obtained<T> {
    pub fn value(&self) -> T {
        match *self {
            Obtained::Requested(v) | Obtained::Relaxed(v) => v,
        }
    }

    pub fn is_relaxed(&self) -> bool {
        matches!(self, Obtained::Relaxed(_))
    }
}

/// Converts a floored/ceiled count to an integer, `None` when it is not
/// a representable non-negative number (NaN, infinite or negative).
pub fn as_count(value: Real) -> Option<Natural> {
    if value.is_finite() {
        value.to_u64()
    } else {
        None
    }
}

pub trait Storable: Serialize {
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), std::io::Error> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    fn to_file(&self, path: &Path) -> Result<(), std::io::Error> {
        let mut file = BufWriter::new(File::create(&path)?);
        self.to_writer(&mut file)?;
        file.write_all(b"\n")?;
        file.flush()
    }
}

pub trait Loadable: DeserializeOwned {
    fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(&path)?;
        let value = serde_json::from_reader(BufReader::new(file))?;
        Ok(value)
    }
}

impl<T: Serialize> Storable for Vec<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn kmh_to_mps_uses_five_eighteenths() {
        let v = 18.0.kmh().mps().value();
        assert_relative_eq!(v, 5.0, max_relative = 1e-12);
    }

    #[test]
    fn mps_to_kmh_round_trip() {
        let v = 5.0.kmh().mps().kmh().value();
        assert_relative_eq!(v, 5.0, max_relative = 1e-12);
    }

    #[test]
    fn integer_literals_are_tagged_not_converted() {
        assert_eq!(60.kmh().value(), 60.0);
        assert_eq!(60.0_f32.mps().value(), 60.0);
    }

    #[test]
    fn as_count_rejects_non_representable() {
        assert_eq!(as_count(24.0), Some(24));
        assert_eq!(as_count(0.0), Some(0));
        assert_eq!(as_count(Real::NAN), None);
        assert_eq!(as_count(Real::INFINITY), None);
        assert_eq!(as_count(-1.0), None);
    }

    #[test]
    fn fixed_timing_budget_excluding_power_on_delay() {
        let budget = DWELL_TIME + SETTLE_TIME + RESET_TIME + JUMPBACK_TIME;
        assert_relative_eq!(budget, 4.3e-6, max_relative = 1e-12);
    }
}
