use crate::types::{Reading, WindowSize};
use std::collections::VecDeque;

/// A running sum over the most recent readings, bounded to a fixed window size.
#[derive(Clone, Debug)]
pub struct SlidingSum {
    /// The readings currently inside the window, oldest first.
    samples: VecDeque<Reading>,
    /// The sum of the readings inside the window.
    sum: i64,
    /// The number of readings to keep.
    window_size: usize,
}

impl SlidingSum {
    /// Constructs an empty SlidingSum with the specified window size.
    pub fn new(window_size: WindowSize) -> Self {
        Self {
            samples: VecDeque::with_capacity(window_size.get()),
            sum: 0,
            window_size: window_size.get(),
        }
    }

    /// Adds a new reading, evicting the oldest one once the window is full.
    pub fn add_sample(&mut self, reading: Reading) {
        if self.samples.len() == self.window_size {
            if let Some(oldest) = self.samples.pop_front() {
                self.sum -= i64::from(oldest);
            }
        }

        self.samples.push_back(reading);

        self.sum += i64::from(reading);
    }

    /// Returns the sum of the readings inside the window.
    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the window holds exactly `window_size` readings.
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.window_size
    }
}
