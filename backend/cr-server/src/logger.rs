use crate::error::{Result as ServerErrorResult, ServerError};

use cr_config::LogLevel;

use std::fmt::{self, Display};
use std::panic::Location;
use std::path::PathBuf;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::{Dispatch, FormatCallback};
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Install the global fern logger.
///
/// `log_file` switches output from stdout to an append-only file; colors
/// only apply to stdout.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let caller = Location::caller();

    let output = match &log_file {
        Some(log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
                location: ErrorLocation::from(caller),
            })?;

            Dispatch::new()
                .format(|out, message, record| {
                    write_line(out, message, record.level(), record)
                })
                .chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, colors.color(record.level()), record)
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(|out, message, record| {
                write_line(out, message, record.level(), record)
            })
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(caller),
        })?;

    match &log_file {
        Some(path) => info!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", log_level),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    level: impl Display,
    record: &Record<'_>,
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
