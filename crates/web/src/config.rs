use std::{str::FromStr, time::Duration};

use anyhow::{Context, Result, ensure};
use importer::sources::usms::DEFAULT_USER_AGENT;
use performance::services::time_codec::SwimTimeBounds;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub time_bounds: SwimTimeBounds,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let min_seconds = parse_or(&lookup, "MIN_SWIM_TIME_SECONDS", SwimTimeBounds::DEFAULT_MIN_SECONDS)?;
        let max_seconds = parse_or(&lookup, "MAX_SWIM_TIME_SECONDS", SwimTimeBounds::DEFAULT_MAX_SECONDS)?;
        ensure!(
            min_seconds < max_seconds,
            "MIN_SWIM_TIME_SECONDS must be below MAX_SWIM_TIME_SECONDS"
        );

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            user_agent: lookup("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
            time_bounds: SwimTimeBounds::new(min_seconds, max_seconds),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", name, value)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.time_bounds, SwimTimeBounds::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("MIN_SWIM_TIME_SECONDS", "15"),
            ("MAX_SWIM_TIME_SECONDS", "3600"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.time_bounds, SwimTimeBounds::new(15.0, 3600.0));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("MIN_SWIM_TIME_SECONDS", "100"), ("MAX_SWIM_TIME_SECONDS", "50")]).is_err());
    }
}
