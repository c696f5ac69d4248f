use super::history::SlidingSum;
use crate::types::{Reading, WindowSize};

/// Lifecycle of a window length inside the tracker.
///
/// A length starts untracked, is initialized by a single scan over the history the
/// first time it is queried and is then maintained on every append. There is no
/// transition back to `Untracked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    Untracked,
    Initializing,
    Tracked,
}

/// Incremental state for one window length.
#[derive(Clone, Debug)]
pub struct TrackedWindow {
    /// The window length.
    window: WindowSize,
    /// The last `window` readings and their sum.
    history: SlidingSum,
    /// The best sum over any complete window seen so far.
    best_sum: Option<i64>,
    /// The number of readings folded into `history` and `best_sum`.
    initialized_through: usize,
    state: WindowState,
}

impl TrackedWindow {
    /// Creates the state for a window length that has not seen any reading yet.
    pub fn new(window: WindowSize) -> Self {
        Self {
            window,
            history: SlidingSum::new(window),
            best_sum: None,
            initialized_through: 0,
            state: WindowState::Initializing,
        }
    }

    /// Folds every reading past the watermark and marks the window as tracked.
    ///
    /// On a fresh window this is the one-time scan over the whole history: every
    /// contiguous window of this length passes through the sliding sum once.
    pub fn backfill(&mut self, readings: &[Reading]) {
        for (index, reading) in readings
            .iter()
            .enumerate()
            .skip(self.initialized_through)
        {
            self.push(*reading, index);
        }

        self.state = WindowState::Tracked;
    }

    /// Folds the reading stored at `index` into the window.
    pub fn push(&mut self, reading: Reading, index: usize) {
        debug_assert_eq!(index, self.initialized_through);

        self.history.add_sample(reading);
        self.initialized_through = index + 1;

        if self.history.is_full() {
            let sum = self.history.sum();
            self.best_sum = Some(self.best_sum.map_or(sum, |best| best.max(sum)));
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    /// The sum of the last `min(k, n)` readings.
    pub fn sum(&self) -> i64 {
        self.history.sum()
    }

    pub fn initialized_through(&self) -> usize {
        self.initialized_through
    }

    /// The highest average over any complete window, if one has formed yet.
    pub fn max_average(&self) -> Option<f64> {
        self.best_sum
            .map(|best| best as f64 / self.window.get() as f64)
    }
}
