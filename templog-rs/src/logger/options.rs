/// Options for constructing a [`TemperatureLogger`](crate::TemperatureLogger).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggerOptions {
    /// The number of readings to reserve room for up front.
    reading_capacity: usize,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `reading_capacity` readings so a feed of known size does
    /// not reallocate the history.
    pub fn with_reading_capacity(mut self, reading_capacity: usize) -> Self {
        self.reading_capacity = reading_capacity;
        self
    }

    pub fn reading_capacity(&self) -> usize {
        self.reading_capacity
    }
}
