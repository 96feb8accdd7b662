use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings for talking to the upstream recipe directory
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FinderConfig {
    /// Base URL of the API; `search.php` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("meal-finder/{}", env!("CARGO_PKG_VERSION"))
}

impl FinderConfig {
    /// Load configuration from `meal-finder.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with MEAL_FINDER__ prefix
/// 2. The given file, or meal-finder.toml in the current directory
/// 3. Default values
///
/// Environment variable format: MEAL_FINDER__BASE_URL
pub fn load_config(path: Option<&Path>) -> Result<FinderConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("meal-finder").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("MEAL_FINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // The environment is process-wide; config tests take turns with it
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "meal-finder-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{body}").unwrap();
        path
    }

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("meal-finder/"));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let path = write_config(
            "file",
            "base_url = \"http://localhost:9999\"\ntimeout = 5\n",
        );

        let config = load_config(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, 5);
        assert!(config.user_agent.starts_with("meal-finder/"));
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let path = write_config(
            "env",
            "base_url = \"http://from-file.invalid\"\ntimeout = 5\n",
        );

        std::env::set_var("MEAL_FINDER__BASE_URL", "http://from-env.invalid");
        std::env::set_var("MEAL_FINDER__TIMEOUT", "7");
        let config = load_config(Some(path.as_path()));
        std::env::remove_var("MEAL_FINDER__BASE_URL");
        std::env::remove_var("MEAL_FINDER__TIMEOUT");
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://from-env.invalid");
        assert_eq!(config.timeout, 7);
    }

    #[test]
    fn test_environment_applies_without_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("MEAL_FINDER__BASE_URL", "http://only-env.invalid");
        let config = FinderConfig::load();
        std::env::remove_var("MEAL_FINDER__BASE_URL");

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://only-env.invalid");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("meal-finder-definitely-missing.toml");
        assert!(load_config(Some(path.as_path())).is_err());
    }
}
