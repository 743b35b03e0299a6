//! Configuration loading and representation.
//!
//! Everything is read from environment variables; unset variables fall back to
//! development defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use revsync_observability::LogFormat;
use revsync_syndication::SyndicationDepth;

pub const ENV_BIND_ADDR: &str = "REVSYNC_BIND_ADDR";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_SEED_PATH: &str = "REVSYNC_SEED_PATH";
pub const ENV_LOG_FORMAT: &str = "REVSYNC_LOG_FORMAT";
pub const ENV_TRANSITIVE: &str = "REVSYNC_TRANSITIVE_SYNDICATION";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEV_JWT_SECRET: &str = "dev-secret";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a boolean, got '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    /// True when no secret was configured and the dev default is in use.
    pub insecure_jwt_secret: bool,
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
    pub syndication_depth: SyndicationDepth,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
            var: ENV_BIND_ADDR,
            value: bind_raw.clone(),
        })?;

        let (jwt_secret, insecure_jwt_secret) = match get(ENV_JWT_SECRET) {
            Some(secret) => (secret, false),
            None => (DEV_JWT_SECRET.to_string(), true),
        };

        let log_format = match get(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| {
                ConfigError::Invalid {
                    var: ENV_LOG_FORMAT,
                    message: e.to_string(),
                }
            })?,
            None => LogFormat::default(),
        };

        let transitive = match get(ENV_TRANSITIVE) {
            Some(raw) => parse_bool(ENV_TRANSITIVE, &raw)?,
            None => false,
        };
        let syndication_depth = if transitive {
            SyndicationDepth::Transitive
        } else {
            SyndicationDepth::Direct
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            insecure_jwt_secret,
            seed_path: get(ENV_SEED_PATH).map(PathBuf::from),
            log_format,
            syndication_depth,
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert!(cfg.insecure_jwt_secret);
        assert_eq!(cfg.seed_path, None);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.syndication_depth, SyndicationDepth::Direct);
    }

    #[test]
    fn explicit_values_are_used() {
        let cfg = config(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_JWT_SECRET, "s3cret"),
            (ENV_SEED_PATH, "/etc/revsync/stores.json"),
            (ENV_LOG_FORMAT, "pretty"),
            (ENV_TRANSITIVE, "true"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.jwt_secret, "s3cret");
        assert!(!cfg.insecure_jwt_secret);
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/etc/revsync/stores.json")));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.syndication_depth, SyndicationDepth::Transitive);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            config(&[(ENV_BIND_ADDR, "nowhere")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            config(&[(ENV_TRANSITIVE, "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
        assert!(matches!(
            config(&[(ENV_LOG_FORMAT, "xml")]),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn transitive_flag_can_be_disabled_explicitly() {
        let cfg = config(&[(ENV_TRANSITIVE, "0")]).unwrap();
        assert_eq!(cfg.syndication_depth, SyndicationDepth::Direct);
    }
}
