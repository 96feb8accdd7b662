//! Where log records go.
//!
//! The interactive screen owns the terminal, so anything written to stderr
//! while it runs would land on top of the frame. Interactive sessions log to
//! a file instead; the one-shot commands keep stderr.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `meal-finder.log` in the system temp directory
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("meal-finder.log")
}

/// Pick the destination for a run. An explicit file always wins.
pub fn target_for(interactive: bool, log_file: Option<&Path>) -> LogTarget {
    match log_file {
        Some(path) => LogTarget::File(path.to_path_buf()),
        None if interactive => LogTarget::File(default_log_path()),
        None => LogTarget::Stderr,
    }
}

/// Logger builder honouring `RUST_LOG`, writing to `target`.
pub fn builder(target: &LogTarget) -> io::Result<Builder> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }
    Ok(builder)
}

/// Install the global logger.
///
/// If the log file cannot be opened no logger is installed and records are
/// dropped; falling back to stderr would corrupt the screen.
pub fn init(target: &LogTarget) {
    match builder(target) {
        Ok(mut builder) => {
            // Only fails if a logger is already installed
            let _ = builder.try_init();
        }
        Err(e) => {
            if *target == LogTarget::Stderr {
                eprintln!("could not set up logging: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};

    #[test]
    fn test_interactive_session_never_logs_to_stderr() {
        assert_eq!(target_for(true, None), LogTarget::File(default_log_path()));
        assert_ne!(target_for(true, None), LogTarget::Stderr);
    }

    #[test]
    fn test_one_shot_commands_log_to_stderr() {
        assert_eq!(target_for(false, None), LogTarget::Stderr);
    }

    #[test]
    fn test_explicit_file_wins() {
        let path = Path::new("/tmp/finder.log");
        assert_eq!(target_for(false, Some(path)), LogTarget::File(path.into()));
        assert_eq!(target_for(true, Some(path)), LogTarget::File(path.into()));
    }

    #[test]
    fn test_file_target_receives_records() {
        let path = std::env::temp_dir().join(format!(
            "meal-finder-log-test-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let logger = builder(&LogTarget::File(path.clone())).unwrap().build();
        logger.log(
            &Record::builder()
                .args(format_args!("search for \"pasta\" failed"))
                .level(Level::Error)
                .target("meal_finder::controller")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(written.contains("search for \"pasta\" failed"));
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let path = std::env::temp_dir()
            .join("meal-finder-no-such-dir")
            .join("finder.log");
        assert!(builder(&LogTarget::File(path)).is_err());
    }
}
