use crate::errors::Error;
use crate::types::{Reading, WindowSize};
use tracing::debug;

/// The append-only history of readings.
///
/// Insertion order is chronological order; readings are never removed or modified.
/// The extremes and the latest value are kept up to date on append so that the
/// statistics snapshot does not need to scan the history.
#[derive(Clone, Debug, Default)]
pub struct ReadingStore {
    readings: Vec<Reading>,
    min: Option<Reading>,
    max: Option<Reading>,
}

impl ReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an empty store with room for `capacity` readings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    /// Validates and appends a reading, returning the stored value.
    ///
    /// The store is left unchanged if the value is rejected.
    pub fn append<T>(&mut self, value: T) -> Result<Reading, Error>
    where
        T: TryInto<Reading, Error = Error>,
    {
        let reading = value.try_into().inspect_err(|err| {
            debug!(%err, "rejected reading");
        })?;

        self.readings.push(reading);
        self.min = Some(self.min.map_or(reading, |min| min.min(reading)));
        self.max = Some(self.max.map_or(reading, |max| max.max(reading)));

        Ok(reading)
    }

    /// Validates a window length against the current history.
    pub fn window<K>(&self, k: K) -> Result<WindowSize, Error>
    where
        K: TryInto<WindowSize, Error = Error>,
    {
        let window = k.try_into()?;

        if window.get() > self.readings.len() {
            return Err(Error::InsufficientData {
                requested: window.get(),
                available: self.readings.len(),
            });
        }

        Ok(window)
    }

    /// Returns the mean of the last `k` readings.
    pub fn suffix_average<K>(&self, k: K) -> Result<f64, Error>
    where
        K: TryInto<WindowSize, Error = Error>,
    {
        let window = self.window(k)?;

        Ok(self.suffix_sum(window) as f64 / window.get() as f64)
    }

    /// Returns the exact sum of the last `window` readings.
    ///
    /// The window must already have been validated against this store.
    pub(crate) fn suffix_sum(&self, window: WindowSize) -> i64 {
        self.readings[self.readings.len() - window.get()..]
            .iter()
            .map(|reading| i64::from(*reading))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn min(&self) -> Option<Reading> {
        self.min
    }

    pub fn max(&self) -> Option<Reading> {
        self.max
    }

    pub fn latest(&self) -> Option<Reading> {
        self.readings.last().copied()
    }
}
