//! Configuration loading and typed config structures for sortviz.
//!
//! The configuration lives in `sortviz-config.yaml` in the working
//! directory. Every field has a default, so the file is optional and may
//! list only the keys it wants to change.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `sortviz-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SortvizConfig {
    /// HTTP listener and request limits.
    #[serde(default)]
    pub server: HttpConfig,

    /// Algorithm selection behavior.
    #[serde(default)]
    pub sort: SortConfig,

    /// Demo array generation bounds.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SortvizConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `SORTVIZ_HOST` overrides `server.host`
    /// - `SORTVIZ_PORT` overrides `server.port`
    /// - `SORTVIZ_STATIC_DIR` replaces `server.static_dirs` with one entry
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if an override or value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Override listener settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `SORTVIZ_PORT` is not a port.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_with(|key| std::env::var(key).ok())
    }

    /// Override listener settings using `lookup` as the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `SORTVIZ_PORT` is not a port.
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SORTVIZ_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SORTVIZ_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::Invalid {
                field: "server.port",
                reason: format!("SORTVIZ_PORT={port}: {e}"),
            })?;
        }
        if let Some(dir) = lookup("SORTVIZ_STATIC_DIR") {
            self.server.static_dirs = vec![dir];
        }
        Ok(())
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_array_len == 0 {
            return Err(ConfigError::Invalid {
                field: "server.max_array_len",
                reason: String::from("must be at least 1"),
            });
        }
        if self.server.max_trace_cells == 0 {
            return Err(ConfigError::Invalid {
                field: "server.max_trace_cells",
                reason: String::from("must be at least 1"),
            });
        }
        if self.generator.max_size == 0 {
            return Err(ConfigError::Invalid {
                field: "generator.max_size",
                reason: String::from("must be at least 1"),
            });
        }
        if !(1..=self.generator.max_size).contains(&self.generator.default_size) {
            return Err(ConfigError::Invalid {
                field: "generator.default_size",
                reason: format!(
                    "{} is outside 1..={}",
                    self.generator.default_size, self.generator.max_size
                ),
            });
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Front-end build directories, tried in order. The first that exists
    /// is served at `/`.
    #[serde(default = "default_static_dirs")]
    pub static_dirs: Vec<String>,

    /// Longest array accepted by `POST /api/sort`.
    #[serde(default = "default_max_array_len")]
    pub max_array_len: usize,

    /// Budget for the array cells a single trace may hold. A request whose
    /// worst-case trace exceeds it is refused before sorting.
    #[serde(default = "default_max_trace_cells")]
    pub max_trace_cells: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dirs: default_static_dirs(),
            max_array_len: default_max_array_len(),
            max_trace_cells: default_max_trace_cells(),
        }
    }
}

/// Algorithm selection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SortConfig {
    /// Reject unknown algorithm names instead of falling back to the
    /// default algorithm.
    #[serde(default)]
    pub strict_algorithm: bool,
}

/// Demo array generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Size used when the request omits one or gives an invalid one.
    #[serde(default = "default_generator_size")]
    pub default_size: usize,

    /// Largest size a request may ask for.
    #[serde(default = "default_generator_max_size")]
    pub max_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_size: default_generator_size(),
            max_size: default_generator_max_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_static_dirs() -> Vec<String> {
    vec!["frontend/out".to_owned(), "frontend/dist".to_owned()]
}

const fn default_max_array_len() -> usize {
    100
}

const fn default_max_trace_cells() -> usize {
    2_000_000
}

const fn default_generator_size() -> usize {
    20
}

const fn default_generator_max_size() -> usize {
    100
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SortvizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.max_array_len, 100);
        assert_eq!(config.generator.default_size, 20);
        assert_eq!(config.generator.max_size, 100);
        assert!(!config.sort.strict_algorithm);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
  static_dirs:
    - web/build
  max_array_len: 50
  max_trace_cells: 5000

sort:
  strict_algorithm: true

generator:
  default_size: 10
  max_size: 30

logging:
  level: "debug"
"#;
        let mut config: SortvizConfig = serde_yml::from_str(yaml).unwrap();
        config.apply_overrides_with(|_| None).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.static_dirs, vec!["web/build".to_owned()]);
        assert_eq!(config.server.max_array_len, 50);
        assert_eq!(config.server.max_trace_cells, 5000);
        assert!(config.sort.strict_algorithm);
        assert_eq!(config.generator.default_size, 10);
        assert_eq!(config.generator.max_size, 30);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: SortvizConfig = serde_yml::from_str("sort:\n  strict_algorithm: true\n").unwrap();
        assert!(config.sort.strict_algorithm);
        assert_eq!(config.server, HttpConfig::default());
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = SortvizConfig::parse("server: [not, a, map");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = SortvizConfig::default();
        config
            .apply_overrides_with(|key| match key {
                "SORTVIZ_HOST" => Some("127.0.0.1".to_owned()),
                "SORTVIZ_PORT" => Some("3001".to_owned()),
                "SORTVIZ_STATIC_DIR" => Some("public".to_owned()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.static_dirs, vec!["public".to_owned()]);
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut config = SortvizConfig::default();
        let result = config.apply_overrides_with(|key| {
            (key == "SORTVIZ_PORT").then(|| "http".to_owned())
        });
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "server.port", .. })
        ));
    }

    #[test]
    fn default_size_must_fit_max() {
        let mut config = SortvizConfig::default();
        config.generator.default_size = 200;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "generator.default_size", .. })
        ));

        config.generator.default_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_array_len_is_rejected() {
        let mut config = SortvizConfig::default();
        config.server.max_array_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_trace_cells_is_rejected() {
        let mut config = SortvizConfig::default();
        config.server.max_trace_cells = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "server.max_trace_cells", .. })
        ));
    }

    #[test]
    fn default_limits_admit_longest_array() {
        let config = SortvizConfig::default();
        let cells = crate::algorithm::worst_case_trace_cells(
            sortviz_types::Algorithm::Bubble,
            config.server.max_array_len,
        );
        assert!(cells <= config.server.max_trace_cells);
    }
}
