use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SITE_URL: &str = "https://redcells.vercel.app";
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("LOG_FORMAT must be 'json' or 'pretty', got '{0}'")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(value.to_string())),
        }
    }
}

/// Runtime settings, read from the environment at startup
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Absolute origin used for sitemap and canonical links, without trailing slash
    pub site_url: String,
    pub maps_api_key: Option<String>,
    /// Simulated latency of mock submissions
    pub submit_delay: Duration,
    /// Intake sessions older than this are dropped
    pub session_ttl: Duration,
    pub log_format: LogFormat,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            site_url: DEFAULT_SITE_URL.to_string(),
            maps_api_key: None,
            submit_delay: Duration::ZERO,
            session_ttl: DEFAULT_SESSION_TTL,
            log_format: LogFormat::Json,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset and empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value,
            })?,
            None => defaults.port,
        };

        let submit_delay = match var("SUBMIT_DELAY_MS") {
            Some(value) => Duration::from_millis(value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidNumber {
                    name: "SUBMIT_DELAY_MS",
                    value,
                }
            })?),
            None => defaults.submit_delay,
        };

        let session_ttl = match var("SESSION_TTL_MINUTES") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(minutes) if minutes > 0 => Duration::from_secs(minutes * 60),
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "SESSION_TTL_MINUTES",
                        value,
                    });
                }
            },
            None => defaults.session_ttl,
        };

        let log_format = match var("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            site_url: var("SITE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.site_url),
            maps_api_key: var("GOOGLE_MAPS_API_KEY"),
            submit_delay,
            session_ttl,
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(config.maps_api_key.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("SITE_URL", "https://www.redcelladvisory.com/"),
            ("GOOGLE_MAPS_API_KEY", "abc123"),
            ("SUBMIT_DELAY_MS", "600"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_url, "https://www.redcelladvisory.com");
        assert_eq!(config.maps_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.submit_delay, Duration::from_millis(600));
    }

    #[test]
    fn empty_key_counts_as_absent() {
        let config = SiteConfig::from_lookup(lookup(&[("GOOGLE_MAPS_API_KEY", "")])).unwrap();
        assert!(config.maps_api_key.is_none());
    }

    #[test]
    fn rejects_bad_port() {
        let err = SiteConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a number, got 'eighty'");
    }

    #[test]
    fn reads_session_ttl_and_log_format() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SESSION_TTL_MINUTES", "45"),
            ("LOG_FORMAT", "Pretty"),
        ]))
        .unwrap();
        assert_eq!(config.session_ttl, Duration::from_secs(45 * 60));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_zero_ttl_and_unknown_log_format() {
        let err = SiteConfig::from_lookup(lookup(&[("SESSION_TTL_MINUTES", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "SESSION_TTL_MINUTES must be a number, got '0'");

        let err = SiteConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "LOG_FORMAT must be 'json' or 'pretty', got 'xml'");
    }
}
