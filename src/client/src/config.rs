//! Client configuration.

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// The endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9009/graphql";

/// The configuration of the HTTP transport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The GraphQL endpoint every operation is sent to.
    pub endpoint: Url,

    /// The request timeout. If `None`, the HTTP client defaults apply.
    pub timeout: Option<Duration>,

    /// The user agent sent with each request.
    pub user_agent: String,
}

impl Config {
    /// Create a configuration for the given endpoint.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            timeout: None,
            user_agent: default_user_agent(),
        })
    }

    /// Load the configuration from the environment.
    ///
    /// * `JOBBOARD_ENDPOINT` – defaults to [`DEFAULT_ENDPOINT`].
    /// * `JOBBOARD_TIMEOUT_SECS` – request timeout in whole seconds, unset by
    ///   default.
    /// * `JOBBOARD_USER_AGENT` – defaults to `jobboard-client/<version>`.
    pub fn from_environment() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("JOBBOARD_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let mut config = Self::new(&endpoint)?;

        if let Some(secs) = lookup("JOBBOARD_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|err| {
                Error::Config(format!("JOBBOARD_TIMEOUT_SECS `{}`: {}", secs, err))
            })?;

            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(user_agent) = lookup("JOBBOARD_USER_AGENT") {
            config = config.with_user_agent(user_agent);
        }

        Ok(config)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn with_user_agent<T: Into<String>>(mut self, user_agent: T) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("jobboard-client/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();

        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("jobboard-client/"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("JOBBOARD_ENDPOINT", "https://jobs.example.com/graphql"),
            ("JOBBOARD_TIMEOUT_SECS", "15"),
            ("JOBBOARD_USER_AGENT", "board/1.0"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint.as_str(), "https://jobs.example.com/graphql");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.user_agent, "board/1.0");
    }

    #[test]
    fn test_invalid_endpoint() {
        let error = Config::from_lookup(lookup(&[("JOBBOARD_ENDPOINT", "not a url")])).unwrap_err();

        assert!(matches!(error, Error::Url(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        let error =
            Config::from_lookup(lookup(&[("JOBBOARD_TIMEOUT_SECS", "soon")])).unwrap_err();

        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = Config::new(DEFAULT_ENDPOINT)
            .unwrap()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test");

        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.user_agent, "test");
    }
}
