//! Logger setup for the binary.
//!
//! The terminal belongs to the UI, so records go to a file in the data
//! directory. `RUST_LOG` overrides the default `info` filter.

use super::constants::LOG_FILE_NAME;
use crate::utils::persistence::data_dir;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Appends log records to `lakeside.log`. Returns the log path.
pub fn init_file_logger() -> io::Result<PathBuf> {
    let path = data_dir()?.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}

/// Logs to stderr, for one-shot commands that don't take over the terminal.
pub fn init_stderr_logger() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}
