use dotenv::dotenv;
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod simulation;

use config::DemoConfig;
use errors::DemoError;

fn main() -> Result<(), DemoError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_names(false)
        .init();

    info!("Starting the simulated temperature logging demo...");

    let config_path = env::var_os("TEMPLOG_CONFIG").map(PathBuf::from);
    let config = DemoConfig::load(config_path.as_deref())?;

    let logger = simulation::replay(&config)?;
    println!("{}", serde_json::to_string_pretty(&logger.get_stats())?);

    let logger = simulation::random_feed(&config)?;
    println!("{}", serde_json::to_string_pretty(&logger.get_stats())?);

    Ok(())
}
