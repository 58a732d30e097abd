//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::database::MongoConfig;
use chrono_tz::Tz;

/// Zone used for the human-readable post date when `DISPLAY_TIMEZONE` is
/// unset or invalid.
pub const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::Asia::Seoul;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<MongoConfig>,
    pub display_timezone: Tz,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("MONGODB_URI").ok().map(|uri| {
            let defaults = MongoConfig::default();
            MongoConfig {
                uri,
                database: env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
                connect_timeout: env::var("MONGODB_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.connect_timeout),
                app_name: defaults.app_name,
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
            display_timezone: Self::parse_display_timezone(env::var("DISPLAY_TIMEZONE").ok()),
        }
    }

    /// Parse an IANA zone name, falling back to Asia/Seoul.
    fn parse_display_timezone(raw: Option<String>) -> Tz {
        let Some(raw) = raw else {
            return DEFAULT_DISPLAY_TIMEZONE;
        };

        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                timezone = %raw,
                "Unknown DISPLAY_TIMEZONE, falling back to {}",
                DEFAULT_DISPLAY_TIMEZONE
            );
            DEFAULT_DISPLAY_TIMEZONE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_timezone_parsing() {
        assert_eq!(
            AppConfig::parse_display_timezone(Some("Europe/Paris".to_string())),
            chrono_tz::Europe::Paris
        );
        assert_eq!(
            AppConfig::parse_display_timezone(Some("Mars/Olympus".to_string())),
            DEFAULT_DISPLAY_TIMEZONE
        );
        assert_eq!(
            AppConfig::parse_display_timezone(None),
            DEFAULT_DISPLAY_TIMEZONE
        );
    }
}
