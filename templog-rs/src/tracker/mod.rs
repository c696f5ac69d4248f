use crate::errors::Error;
use crate::types::{Reading, WindowSize};
use std::collections::BTreeMap;
use tracing::debug;

pub mod history;
pub mod window;

pub use window::{TrackedWindow, WindowState};

/// Registry of every window length queried so far.
///
/// Lengths are added on their first query and never removed. Each append updates
/// every registered length, so a cached maximum is always current.
#[derive(Clone, Debug, Default)]
pub struct WindowTracker {
    windows: BTreeMap<usize, TrackedWindow>,
}

impl WindowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a freshly appended reading into every tracked window.
    pub fn on_reading_appended(&mut self, reading: Reading, index: usize) {
        for tracked in self.windows.values_mut() {
            tracked.push(reading, index);
        }
    }

    /// Returns the highest average over any window of the given length in `readings`.
    ///
    /// The first query for a length scans the whole history once; later queries are
    /// served from the cache. A length longer than the history is rejected without
    /// being registered.
    pub fn get_max_window(
        &mut self,
        window: WindowSize,
        readings: &[Reading],
    ) -> Result<f64, Error> {
        if window.get() > readings.len() {
            return Err(Error::InsufficientData {
                requested: window.get(),
                available: readings.len(),
            });
        }

        let tracked = self.windows.entry(window.get()).or_insert_with(|| {
            debug!(
                window = window.get(),
                readings = readings.len(),
                "backfilling new window length"
            );
            TrackedWindow::new(window)
        });

        if tracked.initialized_through() != readings.len() {
            tracked.backfill(readings);
        }

        tracked.max_average().ok_or(Error::InsufficientData {
            requested: window.get(),
            available: readings.len(),
        })
    }

    /// Returns the lifecycle state of a window length.
    pub fn state(&self, window: usize) -> WindowState {
        self.windows
            .get(&window)
            .map_or(WindowState::Untracked, TrackedWindow::state)
    }

    pub fn get(&self, window: usize) -> Option<&TrackedWindow> {
        self.windows.get(&window)
    }

    /// The tracked window lengths in ascending order.
    pub fn tracked_windows(&self) -> impl Iterator<Item = usize> + '_ {
        self.windows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
