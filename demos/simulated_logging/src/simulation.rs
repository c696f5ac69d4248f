use crate::config::DemoConfig;
use crate::errors::DemoError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use templog::logger::options::LoggerOptions;
use templog::TemperatureLogger;
use tracing::info;

/// Replays the configured readings, reporting on every configured window length
/// after each `report_every` readings.
pub fn replay(config: &DemoConfig) -> Result<TemperatureLogger, DemoError> {
    let mut logger = TemperatureLogger::with_options(
        LoggerOptions::new().with_reading_capacity(config.readings.len()),
    );

    for (i, temp) in config.readings.iter().enumerate() {
        logger.add_reading(*temp)?;
        info!(reading = i + 1, temp, "added reading");

        if (i + 1) % config.report_every == 0 {
            report(&mut logger, &config.windows)?;
        }
    }

    if !logger.is_empty() {
        let average = logger.get_average(logger.len())?;
        info!(total = logger.len(), average, "replay finished");
        report(&mut logger, &config.windows)?;
    }

    Ok(logger)
}

/// Feeds `random_readings` seeded random readings, querying the logger after every
/// `query_every` readings.
pub fn random_feed(config: &DemoConfig) -> Result<TemperatureLogger, DemoError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut logger = TemperatureLogger::with_options(
        LoggerOptions::new().with_reading_capacity(config.random_readings),
    );
    let start = Instant::now();

    for i in 0..config.random_readings {
        logger.add_reading(rng.gen_range(-10i64..=10))?;

        if i > 0 && i % config.query_every == 0 {
            logger.get_average(i.min(100))?;
            logger.get_max_window(i.min(50))?;
        }
    }

    info!(
        readings = config.random_readings,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "random feed finished"
    );

    Ok(logger)
}

/// Logs the recent average and the best window for every length the history covers.
fn report(logger: &mut TemperatureLogger, windows: &[usize]) -> Result<(), DemoError> {
    for window in windows.iter().copied() {
        if window > logger.len() {
            continue;
        }

        let average = logger.get_average(window)?;
        let max_window = logger.get_max_window(window)?;

        info!(
            window,
            average = %format!("{average:.2}"),
            max_window = %format!("{max_window:.2}"),
            "window report"
        );
    }

    Ok(())
}
