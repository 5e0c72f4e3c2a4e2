//! services/trivia/src/config.rs
//!
//! Defines the game's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. A `.env`
//! file is honoured for local tweaking.

use tracing::Level;

use crate::game::countdown::CountdownPolicy;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Seconds allowed per question when nothing else is configured.
pub const DEFAULT_TIME_LIMIT: u32 = 15;

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub time_limit: u32,
    pub countdown: CountdownPolicy,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            countdown: CountdownPolicy::default(),
            log_level: Level::WARN,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory, but this is
    /// skipped in test builds to keep tests hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let time_limit = match lookup("TRIVIA_TIME_LIMIT") {
            Some(raw) => parse_seconds("TRIVIA_TIME_LIMIT", &raw)?,
            None => defaults.time_limit,
        };
        if time_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "TRIVIA_TIME_LIMIT".to_string(),
                "must be at least one second".to_string(),
            ));
        }

        let reminders = match lookup("TRIVIA_REMINDERS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_seconds("TRIVIA_REMINDERS", s))
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.countdown.reminders,
        };

        let final_stretch = match lookup("TRIVIA_FINAL_STRETCH") {
            Some(raw) => parse_seconds("TRIVIA_FINAL_STRETCH", &raw)?,
            None => defaults.countdown.final_stretch,
        };

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "WARN".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            time_limit,
            countdown: CountdownPolicy::new(reminders, final_stretch),
            log_level,
        })
    }
}

fn parse_seconds(var: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidValue(var.to_string(), format!("'{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_the_classic_game() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.time_limit, 15);
        assert_eq!(config.countdown, CountdownPolicy::default());
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TRIVIA_TIME_LIMIT", "30"),
            ("TRIVIA_REMINDERS", "20, 10"),
            ("TRIVIA_FINAL_STRETCH", "5"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.time_limit, 30);
        assert_eq!(config.countdown, CountdownPolicy::new(vec![20, 10], 5));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn zero_time_limit_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("TRIVIA_TIME_LIMIT", "0")])).unwrap_err();
        assert!(err.to_string().contains("TRIVIA_TIME_LIMIT"));
    }

    #[test]
    fn garbage_reminder_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("TRIVIA_REMINDERS", "10,soon")])).unwrap_err();
        assert!(err.to_string().contains("TRIVIA_REMINDERS"));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("RUST_LOG", "chatty")])).is_err());
    }
}
