//! Runtime configuration, read from the environment once at startup.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use http::HeaderValue;

use crate::consts;

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `.env` is expected to have been loaded beforehand with `dotenv`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults in [`consts`] for missing keys. A present but malformed
    /// value is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(consts::ENV_HOST) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not an IP address: {raw}", consts::ENV_HOST))?,
            None => default_host(),
        };

        let port = match lookup(consts::ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a valid port: {raw}", consts::ENV_PORT))?,
            None => consts::HTTP_PORT,
        };

        let cors_origin = match lookup(consts::ENV_CORS_ORIGIN) {
            Some(raw) => HeaderValue::from_str(raw.trim()).with_context(|| {
                format!("{} is not a valid origin: {raw}", consts::ENV_CORS_ORIGIN)
            })?,
            None => HeaderValue::from_static(consts::CORS_ORIGIN),
        };

        Ok(Self {
            host,
            port,
            cors_origin,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: consts::HTTP_PORT,
            cors_origin: HeaderValue::from_static(consts::CORS_ORIGIN),
        }
    }
}

fn default_host() -> IpAddr {
    consts::HTTP_HOST
        .parse()
        .unwrap_or(IpAddr::from([0, 0, 0, 0]))
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
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, "http://localhost:4200");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (consts::ENV_HOST, "127.0.0.1"),
            (consts::ENV_PORT, " 3000 "),
            (consts::ENV_CORS_ORIGIN, "https://forms.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, "https://forms.example.com");
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let invalid_cases = vec![
            (consts::ENV_HOST, "localhost:80"),
            (consts::ENV_PORT, "99999"),
            (consts::ENV_PORT, "http"),
            (consts::ENV_CORS_ORIGIN, "bad\norigin"),
        ];

        for (key, value) in invalid_cases {
            assert!(
                Config::from_lookup(lookup_from(&[(key, value)])).is_err(),
                "{key}={value:?} should be rejected"
            );
        }
    }
}
