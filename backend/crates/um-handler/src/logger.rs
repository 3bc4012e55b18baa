//! fern-backed `log` output for headless sessions and tests.

use crate::{HandlerError, HandlerResult};

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};
use um_config::{Config, LogLevel};

/// Install the global logger.
///
/// # Arguments
/// * `log_level` - Level filter applied to every record
/// * `log_file` - `None` logs to stdout, `Some` appends to the file (parent
///   directories are created)
/// * `colored` - Colored level names on stdout; ignored for file output
///
/// Fails when a logger is already installed.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> HandlerResult<()> {
    let output = match log_file.as_deref() {
        Some(path) => file_output(path)?,
        None if colored => colored_stdout(),
        None => plain_stdout(),
    };

    Dispatch::new()
        .level(log_level.0)
        .chain(output)
        .apply()
        .map_err(|e| HandlerError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            log_level.0,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", log_level.0),
    }

    Ok(())
}

/// Initialize from the `[logging]` section of the configuration
pub fn initialize_from_config(config: &Config) -> HandlerResult<()> {
    let log_file = config
        .log_file_path()
        .map_err(|e| HandlerError::logger(e.to_string()))?;

    initialize(config.logging.level, log_file, config.logging.colored)
}

/// `[{date} - {level}] {message} [{file}:{line}]`
fn write_line<L: std::fmt::Display>(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: L,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn file_output(path: &Path) -> HandlerResult<Dispatch> {
    Ok(Dispatch::new()
        .format(|out, message, record| write_line(out, message, record, record.level()))
        .chain(open_log_file(path)?))
}

fn colored_stdout() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            write_line(out, message, record, colors.color(record.level()))
        })
        .chain(std::io::stdout())
}

fn plain_stdout() -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| write_line(out, message, record, record.level()))
        .chain(std::io::stdout())
}

fn open_log_file(path: &Path) -> HandlerResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            HandlerError::logger(format!(
                "Failed to create log directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| HandlerError::logger(format!("Failed to open log file {}: {e}", path.display())))
}
