//! Configuration management for TicketLens

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix for environment overrides, e.g. `TICKETLENS__ANALYTICS__TOP_REPORTERS=5`
pub const ENV_PREFIX: &str = "TICKETLENS";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search configuration
    pub search: SearchConfig,

    /// Analytics configuration
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Later sources override earlier ones.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.analytics.top_reporters == 0 {
            return Err(Error::validation("analytics.top_reporters must be at least 1"));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(Error::validation(format!(
                "logging.format must be 'pretty' or 'json', got '{other}'"
            ))),
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Also match free text against the reporter email
    pub match_reporter_email: bool,
}

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Size of the reporter leaderboard
    pub top_reporters: usize,
    /// Reported as the most common label when no ticket has labels
    pub no_label: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_reporters: 10,
            no_label: "None".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (json or pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analytics.top_reporters, 10);
        assert_eq!(config.analytics.no_label, "None");
        assert!(!config.search.match_reporter_email);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
            [search]
            match_reporter_email = true

            [analytics]
            top_reporters = 3
            "#,
        );

        let config = Config::load(Some(file.path())).unwrap();

        assert!(config.search.match_reporter_email);
        assert_eq!(config.analytics.top_reporters, 3);
        // Untouched sections keep their defaults
        assert_eq!(config.analytics.no_label, "None");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/ticketlens.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_leaderboard_rejected() {
        let file = write_config("[analytics]\ntop_reporters = 0\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }
}
