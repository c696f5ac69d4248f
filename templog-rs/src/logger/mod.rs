use crate::errors::Error;
use crate::store::ReadingStore;
use crate::tracker::{WindowState, WindowTracker};
use crate::types::{LoggerStats, Reading, WindowSize};
use tracing::trace;

pub mod options;

use options::LoggerOptions;

/// Logs temperature readings and answers window queries over them.
///
/// The logger owns the history and the registry of tracked window lengths. Appends
/// cost O(W) for W tracked lengths, `get_average(k)` costs O(k) and
/// `get_max_window(k)` costs O(n) the first time a length is queried and O(1)
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct TemperatureLogger {
    store: ReadingStore,
    tracker: WindowTracker,
}

impl TemperatureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoggerOptions) -> Self {
        Self {
            store: ReadingStore::with_capacity(options.reading_capacity()),
            tracker: WindowTracker::new(),
        }
    }

    /// Records a new reading.
    ///
    /// Fails with `InvalidReading` for non-integer input and `OutOfRange` for
    /// integers outside [-10, 10]; nothing is recorded in either case.
    pub fn add_reading<T>(&mut self, temp: T) -> Result<(), Error>
    where
        T: TryInto<Reading, Error = Error>,
    {
        let reading = self.store.append(temp)?;
        let index = self.store.len() - 1;

        trace!(index, reading = reading.value(), "recorded reading");

        self.tracker.on_reading_appended(reading, index);

        Ok(())
    }

    /// Returns the average of the last `k` readings.
    pub fn get_average<K>(&self, k: K) -> Result<f64, Error>
    where
        K: TryInto<WindowSize, Error = Error>,
    {
        self.store.suffix_average(k)
    }

    /// Returns the highest average over any contiguous window of `k` readings
    /// recorded so far.
    pub fn get_max_window<K>(&mut self, k: K) -> Result<f64, Error>
    where
        K: TryInto<WindowSize, Error = Error>,
    {
        let window = self.store.window(k)?;

        self.tracker.get_max_window(window, self.store.readings())
    }

    /// Returns a snapshot of the history and the tracked window lengths.
    pub fn get_stats(&self) -> LoggerStats {
        LoggerStats {
            total_readings: self.store.len(),
            tracked_windows: self.tracker.tracked_windows().collect(),
            min_reading: self.store.min().map(|reading| reading.value()),
            max_reading: self.store.max().map(|reading| reading.value()),
            latest_reading: self.store.latest().map(|reading| reading.value()),
        }
    }

    pub fn window_state(&self, k: usize) -> WindowState {
        self.tracker.state(k)
    }

    pub fn readings(&self) -> &[Reading] {
        self.store.readings()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
