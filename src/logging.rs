use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable overriding the default log level
pub const LOG_LEVEL_ENV: &str = "CSS_VARIABLE_VIEWER_LOG";

struct FileLogger {
    file: Mutex<std::fs::File>,
}

impl FileLogger {
    fn new(file_path: PathBuf) -> io::Result<Self> {
        // Create parent directories if they don't exist
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(FileLogger {
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(
                    file,
                    "[{}] [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                );
                let _ = file.flush();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Get the platform-specific log file path
fn get_log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .ok_or("Could not determine local data directory")?;

    let viewer_dir = data_dir.join("CssVariableViewer");
    let log_file_path = viewer_dir.join("css_variable_viewer.log");

    Ok(log_file_path)
}

/// Level from the environment, `Info` when unset or invalid
fn level_from_env() -> LevelFilter {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize the logger to write to a single file in local app data, overwriting previous logs
pub fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    let log_file_path = get_log_file_path()?;
    let logger = FileLogger::new(log_file_path)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level_from_env()))?;

    Ok(())
}

/// Change the level after initialization, e.g. from client settings
pub fn set_level(level: LevelFilter) {
    if level != log::max_level() {
        log::info!("Log level changed to {}", level);
        log::set_max_level(level);
    }
}
