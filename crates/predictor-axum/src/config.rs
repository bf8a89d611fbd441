//! Server configuration loaded from the process environment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use figment::Figment;
use figment::providers::Env;
use predictor_guess::GuessClientConfig;
use serde::{Deserialize, Deserializer, de};
use thiserror::Error;

/// Environment variables read by [`ServerConfig::from_env`].
const ENV_KEYS: &[&str] = &[
    "ENV",
    "DATABASE_PATH",
    "SERVER_ADDRESS",
    "SERVER_TIMEOUT",
    "AGIFY_URL",
    "GENDERIZE_URL",
    "NATIONALIZE_URL",
    "GUESS_MAX_RETRIES",
];

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Deployment environment; selects log format and level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Prod,
}

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat view of the environment; keys are the lowercased variable names.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct EnvSettings {
    env: Environment,
    database_path: PathBuf,
    server_address: String,
    #[serde(deserialize_with = "deserialize_duration")]
    server_timeout: Duration,
    agify_url: Option<String>,
    genderize_url: Option<String>,
    nationalize_url: Option<String>,
    guess_max_retries: Option<u8>,
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            env: Environment::Local,
            database_path: PathBuf::from("predictor.db"),
            server_address: "localhost:8081".to_string(),
            server_timeout: Duration::from_secs(4),
            agify_url: None,
            genderize_url: None,
            nationalize_url: None,
            guess_max_retries: None,
        }
    }
}

/// Human-readable durations such as `4s`, `1500ms` or `1m 30s`.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(|e| {
        de::Error::custom(format_args!("invalid duration '{raw}': {e}"))
    })
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    /// `SQLite` database file.
    pub database_path: PathBuf,
    /// Listen address, `host:port`.
    pub address: String,
    /// Upper bound on handling a single request.
    pub request_timeout: Duration,
    /// Demographics client settings.
    pub guess: GuessClientConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        EnvSettings::default().into()
    }
}

impl From<EnvSettings> for ServerConfig {
    fn from(settings: EnvSettings) -> Self {
        let mut guess = GuessClientConfig::default();
        if let Some(url) = settings.agify_url {
            guess = guess.with_agify_url(url);
        }
        if let Some(url) = settings.genderize_url {
            guess = guess.with_genderize_url(url);
        }
        if let Some(url) = settings.nationalize_url {
            guess = guess.with_nationalize_url(url);
        }
        if let Some(retries) = settings.guess_max_retries {
            guess = guess.with_max_retries(retries);
        }

        Self {
            environment: settings.env,
            database_path: settings.database_path,
            address: settings.server_address,
            request_timeout: settings.server_timeout,
            guess,
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(Figment::from(Env::raw().only(ENV_KEYS)))
    }

    /// Extract configuration from an already assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = figment.extract().map_err(Box::new)?;
        Ok(settings.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_figment(Figment::new()).unwrap();
        assert_eq!(config.environment, Environment::Local);
        assert_eq!(config.address, "localhost:8081");
        assert_eq!(config.database_path, PathBuf::from("predictor.db"));
        assert_eq!(config.request_timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("ENV", "prod");
            jail.set_env("SERVER_ADDRESS", "0.0.0.0:9000");
            jail.set_env("SERVER_TIMEOUT", "1500ms");
            jail.set_env("DATABASE_PATH", "/tmp/people.db");
            jail.set_env("GUESS_MAX_RETRIES", "1");

            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.environment, Environment::Prod);
            assert_eq!(config.address, "0.0.0.0:9000");
            assert_eq!(config.request_timeout, Duration::from_millis(1500));
            assert_eq!(config.database_path, PathBuf::from("/tmp/people.db"));
            Ok(())
        });
    }

    #[test]
    fn test_compound_timeouts() {
        Jail::expect_with(|jail| {
            jail.set_env("SERVER_TIMEOUT", "1m30s");
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.request_timeout, Duration::from_secs(90));

            jail.set_env("SERVER_TIMEOUT", "2h 5min");
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.request_timeout, Duration::from_secs(2 * 3600 + 5 * 60));
            Ok(())
        });
    }

    #[test]
    fn test_unknown_environment_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("ENV", "staging");
            assert!(matches!(
                ServerConfig::from_env(),
                Err(ConfigError::Invalid(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("SERVER_TIMEOUT", "soon");
            assert!(ServerConfig::from_env().is_err());
            Ok(())
        });
        Jail::expect_with(|jail| {
            jail.set_env("GUESS_MAX_RETRIES", "-1");
            assert!(ServerConfig::from_env().is_err());
            Ok(())
        });
    }
}
