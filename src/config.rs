use clap::ValueEnum;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use tracing::Level;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub login_delay: LoginDelayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: LogLevel,
    pub debug: bool,  // enables per-request HTTP tracing
}

/// Parameters of the truncated normal delay applied after a successful login.
#[derive(Debug, Deserialize, Clone)]
pub struct LoginDelayConfig {
    pub enabled: bool,
    pub mean_secs: f64,
    pub stddev_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_tracing_level(self) -> Level {
        match self {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error | LogLevel::Critical => Level::ERROR,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    // Built-in values, used when neither the config file nor the environment sets a key
    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.log_level", "DEBUG")?
            .set_default("server.debug", true)?
            .set_default("login_delay.enabled", true)?
            .set_default("login_delay.mean_secs", 2.0)?
            .set_default("login_delay.stddev_secs", 1.0)?
            .set_default("login_delay.min_secs", 1.0)?
            .set_default("login_delay.max_secs", 4.0)
    }

    /// Command-line values win over every other source.
    pub fn apply_overrides(&mut self, port: Option<u16>, log_level: Option<LogLevel>, debug: Option<bool>) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(level) = log_level {
            self.server.log_level = level;
        }
        if let Some(debug) = debug {
            self.server.debug = debug;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Config {
        Config::defaults()
            .unwrap()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_match_the_documented_service_settings() {
        let config = from_toml("");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.log_level, LogLevel::Debug);
        assert!(config.server.debug);
        assert!(config.login_delay.enabled);
        assert_eq!(config.login_delay.mean_secs, 2.0);
        assert_eq!(config.login_delay.stddev_secs, 1.0);
        assert_eq!(config.login_delay.min_secs, 1.0);
        assert_eq!(config.login_delay.max_secs, 4.0);
    }

    #[test]
    fn file_values_replace_defaults() {
        let config = from_toml(
            r#"
            [server]
            port = 8080
            log_level = "WARNING"

            [login_delay]
            enabled = false
            "#,
        );
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_level, LogLevel::Warning);
        assert!(!config.login_delay.enabled);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn overrides_win() {
        let mut config = from_toml("");
        config.apply_overrides(Some(6000), Some(LogLevel::Error), Some(false));
        assert_eq!(config.server.port, 6000);
        assert_eq!(config.server.log_level, LogLevel::Error);
        assert!(!config.server.debug);

        config.apply_overrides(None, None, None);
        assert_eq!(config.server.port, 6000);
    }

    #[test]
    fn log_levels_map_onto_tracing() {
        assert_eq!(LogLevel::Debug.as_tracing_level(), Level::DEBUG);
        assert_eq!(LogLevel::Warning.as_tracing_level(), Level::WARN);
        assert_eq!(LogLevel::Critical.as_tracing_level(), Level::ERROR);
    }
}
