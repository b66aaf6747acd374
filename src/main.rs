mod config;
mod error;
mod log_file;
mod prober;
mod report;
mod runner;
mod types;

use anyhow::Result;
use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = config::Cli::parse();

    // Load configuration
    let config = config::load_config(&cli)?;

    SimpleLogger::new()
        .with_level(config.level_filter()?)
        .env()
        .init()?;

    info!("Probing {} (timeout {}s)", config.url, config.timeout_secs);

    let log_path = runner::run(&config).await?;
    info!("Probe finished, log at {:?}", log_path);

    Ok(())
}
