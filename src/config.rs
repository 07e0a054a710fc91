use std::env;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_address: String,
    pub workers: usize,
    pub log_level: String,
    pub metrics_endpoint: String,
    /// Reject unknown activity names instead of reporting them as unmatched.
    pub strict_activity_matching: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            workers: num_cpus::get(),
            log_level: "info".to_string(),
            metrics_endpoint: "/metrics".to_string(),
            strict_activity_matching: false,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let workers = match lookup("WORKERS") {
            Some(raw) => parse_workers(&raw)?,
            None => defaults.workers,
        };

        let metrics_endpoint = lookup("METRICS_ENDPOINT").unwrap_or(defaults.metrics_endpoint);
        if !metrics_endpoint.starts_with('/') {
            return Err(AppError::Configuration(format!(
                "METRICS_ENDPOINT must start with '/', got '{}'",
                metrics_endpoint
            )));
        }

        let strict_activity_matching = match lookup("STRICT_ACTIVITY_MATCHING") {
            Some(raw) => parse_bool("STRICT_ACTIVITY_MATCHING", &raw)?,
            None => defaults.strict_activity_matching,
        };

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            workers,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            metrics_endpoint,
            strict_activity_matching,
        })
    }
}

fn parse_workers(raw: &str) -> Result<usize, AppError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Configuration(format!(
            "WORKERS must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::Configuration(format!("{} must be true or false, got '{}'", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.metrics_endpoint, "/metrics");
        assert_eq!(config.log_level, "info");
        assert!(!config.strict_activity_matching);
        assert!(config.workers >= 1);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BIND_ADDRESS", "0.0.0.0:9000"),
            ("WORKERS", "2"),
            ("STRICT_ACTIVITY_MATCHING", "Yes"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.workers, 2);
        assert!(config.strict_activity_matching);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config_from(&[("WORKERS", "0")]), Err(AppError::Configuration(_))));
        assert!(matches!(config_from(&[("WORKERS", "many")]), Err(AppError::Configuration(_))));
        assert!(matches!(
            config_from(&[("STRICT_ACTIVITY_MATCHING", "maybe")]),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(config_from(&[("METRICS_ENDPOINT", "metrics")]), Err(AppError::Configuration(_))));
    }
}
