//! File logging
//!
//! The TUI owns the terminal, so log output only goes to a file, and only when
//! one is requested. `RUST_LOG` filters as usual; the default level is info.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::StopChatError;

/// Send `log` output to `path`, appending
pub fn init_file_logger(path: &Path) -> Result<(), StopChatError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| StopChatError::Logger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("stopchat.log");

        let result = init_file_logger(&path);

        assert!(matches!(result, Err(StopChatError::Io(_))));
    }
}
