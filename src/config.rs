use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Result;
use tracing::info;

use crate::session::Credentials;

/// Runtime settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog JSON file. Takes precedence over the URL.
    pub properties_path: Option<PathBuf>,
    pub properties_url: Option<String>,
    pub session_file: PathBuf,
    pub http_timeout: Duration,
    pub credentials: Credentials,
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `load` uses the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Credentials::default();

        Ok(Self {
            properties_path: lookup("GETAWAY_PROPERTIES_PATH").map(PathBuf::from),
            properties_url: lookup("GETAWAY_PROPERTIES_URL"),
            session_file: try_load(&lookup, "GETAWAY_SESSION_FILE", ".getaway-session")?,
            http_timeout: Duration::from_secs(try_load(&lookup, "GETAWAY_HTTP_TIMEOUT_SECS", "30")?),
            credentials: Credentials::new(
                try_load::<String>(&lookup, "GETAWAY_USERNAME", &defaults.username)?,
                try_load::<String>(&lookup, "GETAWAY_PASSWORD", &defaults.password)?,
            ),
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow::anyhow!("Invalid {key} value '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.properties_path.is_none());
        assert!(config.properties_url.is_none());
        assert_eq!(config.session_file, PathBuf::from(".getaway-session"));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.credentials, Credentials::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GETAWAY_PROPERTIES_PATH", "data/properties.json"),
            ("GETAWAY_HTTP_TIMEOUT_SECS", "5"),
            ("GETAWAY_USERNAME", "grupo"),
        ]))
        .unwrap();

        assert_eq!(
            config.properties_path,
            Some(PathBuf::from("data/properties.json"))
        );
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.credentials.username, "grupo");
        assert_eq!(config.credentials.password, "admin");
    }

    #[test]
    fn test_malformed_timeout_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("GETAWAY_HTTP_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("GETAWAY_HTTP_TIMEOUT_SECS"));
    }
}
