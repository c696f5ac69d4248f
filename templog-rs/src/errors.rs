use thiserror::Error;

/// Errors reported by the temperature logger.
///
/// Every variant is a caller-input problem: the logger is left exactly as it was
/// before the failing call, so the caller can retry with valid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Reading {value} is not an integer.")]
    InvalidReading { value: f64 },
    #[error("Reading {value} is outside the accepted range [{min}, {max}].")]
    OutOfRange { value: i64, min: i8, max: i8 },
    #[error("Window size {size} must be a positive integer.")]
    InvalidWindowSize { size: f64 },
    #[error("Not enough readings. Have {available}, need {requested}.")]
    InsufficientData { requested: usize, available: usize },
}
