use crate::config::Config;
use crate::log_file;
use crate::prober;
use crate::report;
use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::path::PathBuf;

/// Probes the configured endpoint once, prints the report and saves it.
///
/// Returns the path of the new log file. Only local I/O failures are errors;
/// whatever the endpoint does ends up in the report.
pub async fn run(config: &Config) -> Result<PathBuf> {
    log_file::ensure_log_dir(&config.log_dir)?;

    let timestamp = Local::now();
    let log_path = log_file::log_file_path(&config.log_dir, &timestamp);

    let client = prober::build_client(config.timeout(), &config.user_agent)
        .context("Failed to build HTTP client")?;
    let result = prober::probe(&client, &config.url, timestamp).await;

    let lines = report::render(&result);
    for line in &lines {
        println!("{}", line);
    }

    log_file::write_log(&log_path, &result.timestamp, &lines)?;
    info!("Report written to {:?}", log_path);

    println!("\nLog has been saved to: {}\n", log_path.display());
    Ok(log_path)
}
