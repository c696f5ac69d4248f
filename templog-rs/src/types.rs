use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single validated temperature reading in the closed range [-10, 10].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i8")]
pub struct Reading(i8);

impl Reading {
    /// The lowest accepted temperature.
    pub const MIN: i8 = -10;
    /// The highest accepted temperature.
    pub const MAX: i8 = 10;

    pub fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Reading> for i8 {
    fn from(reading: Reading) -> Self {
        reading.0
    }
}

impl From<Reading> for i64 {
    fn from(reading: Reading) -> Self {
        reading.0 as i64
    }
}

impl TryFrom<i64> for Reading {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(Reading::MIN as i64..=Reading::MAX as i64).contains(&value) {
            return Err(Error::OutOfRange {
                value,
                min: Reading::MIN,
                max: Reading::MAX,
            });
        }

        Ok(Reading(value as i8))
    }
}

impl TryFrom<i8> for Reading {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Reading::try_from(value as i64)
    }
}

impl TryFrom<i32> for Reading {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Reading::try_from(value as i64)
    }
}

impl TryFrom<f64> for Reading {
    type Error = Error;

    /// Accepts integer-valued floats only, so `5.0` is a reading and `5.5` is not.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::InvalidReading { value });
        }

        // Saturating cast; anything that large is rejected by the range check.
        Reading::try_from(value as i64)
    }
}

/// A validated window length: a positive number of most-recent readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(usize);

impl WindowSize {
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        if size == 0 {
            return Err(Error::InvalidWindowSize { size: 0.0 });
        }

        Ok(WindowSize(size))
    }
}

impl TryFrom<i64> for WindowSize {
    type Error = Error;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        match usize::try_from(size) {
            Ok(size) => WindowSize::try_from(size),
            Err(_) => Err(Error::InvalidWindowSize { size: size as f64 }),
        }
    }
}

impl TryFrom<i32> for WindowSize {
    type Error = Error;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        WindowSize::try_from(size as i64)
    }
}

impl TryFrom<f64> for WindowSize {
    type Error = Error;

    fn try_from(size: f64) -> Result<Self, Self::Error> {
        if !size.is_finite() || size.fract() != 0.0 || size < 1.0 {
            return Err(Error::InvalidWindowSize { size });
        }

        Ok(WindowSize(size as usize))
    }
}

/// A read-only snapshot of the logger, derived from the reading store and the
/// window registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerStats {
    /// The number of readings recorded so far.
    pub total_readings: usize,
    /// The window lengths that have been queried at least once.
    pub tracked_windows: BTreeSet<usize>,
    /// The lowest reading in the history.
    pub min_reading: Option<i8>,
    /// The highest reading in the history.
    pub max_reading: Option<i8>,
    /// The most recent reading.
    pub latest_reading: Option<i8>,
}
