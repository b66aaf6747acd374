use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "spotify_api_test_";
const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
const LINE_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Creates the log directory; an existing one is fine.
pub fn ensure_log_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {:?}", dir))?;
    debug!("Log directory ready: {:?}", dir);
    Ok(())
}

pub fn log_file_path(dir: &Path, timestamp: &DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "{}{}.log",
        FILE_PREFIX,
        timestamp.format(FILE_STAMP_FORMAT)
    ))
}

pub fn stamp_line(timestamp: &DateTime<Local>, line: &str) -> String {
    format!("[{}] {}", timestamp.format(LINE_STAMP_FORMAT), line)
}

/// Writes `lines` to a fresh file at `path`, each prefixed with the run's stamp.
pub fn write_log(path: &Path, timestamp: &DateTime<Local>, lines: &[String]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", stamp_line(timestamp, line))
            .with_context(|| format!("Failed to write log file: {:?}", path))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write log file: {:?}", path))?;
    Ok(())
}
