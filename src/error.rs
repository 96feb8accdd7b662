use thiserror::Error;

/// Errors that can occur while searching for or presenting meals
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to reach the upstream endpoint or it answered with an error status
    #[error("Failed to fetch meals: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Upstream answered but the body was not a valid search document
    #[error("Failed to decode search response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal setup, drawing, input or output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A search ended in failure; the cause has already been logged
    #[error("Failed to fetch meals. Please try again.")]
    SearchFailed,

    /// The system browser could not be launched
    #[error("Could not open browser: {0}")]
    BrowserError(std::io::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    ClientError(String),

    /// A result position was requested that the last search did not return
    #[error("No result #{index}: the search returned {count} meal(s)")]
    NoSuchResult { index: usize, count: usize },
}
