#![doc = include_str!("../../README.md")]

pub mod errors;
pub mod logger;
pub mod store;
pub mod tracker;
pub mod types;

pub use logger::TemperatureLogger;
