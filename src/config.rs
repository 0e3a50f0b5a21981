//! Client configuration, read from the environment.

use crate::error::{PortfolioError, Result};
use crate::url_validator::validate_base_url;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Paths of the collaborator endpoints, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub greeting: String,
    pub login_status: String,
    pub comments: String,
    pub delete_comments: String,
    pub locations: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            greeting: "/greeting".to_string(),
            login_status: "/login-status".to_string(),
            comments: "/data".to_string(),
            delete_comments: "/delete-data".to_string(),
            locations: "/locations".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub timeout: Duration,
    pub endpoints: Endpoints,
}

impl Config {
    /// Config pointing at `base_url` with default timeout and endpoint paths.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: validate_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            endpoints: Endpoints::default(),
        })
    }

    pub fn load() -> Result<Self> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Endpoints::default();
        let base_url: String = try_load(&lookup, "PORTFOLIO_URL", DEFAULT_BASE_URL)?;
        let timeout_secs: u64 = try_load(
            &lookup,
            "PORTFOLIO_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )?;
        if timeout_secs == 0 {
            return Err(PortfolioError::Config(
                "PORTFOLIO_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            base_url: validate_base_url(&base_url)?,
            timeout: Duration::from_secs(timeout_secs),
            endpoints: Endpoints {
                greeting: try_load(&lookup, "PORTFOLIO_GREETING_PATH", &defaults.greeting)?,
                login_status: try_load(&lookup, "PORTFOLIO_LOGIN_PATH", &defaults.login_status)?,
                comments: try_load(&lookup, "PORTFOLIO_COMMENTS_PATH", &defaults.comments)?,
                delete_comments: try_load(
                    &lookup,
                    "PORTFOLIO_DELETE_PATH",
                    &defaults.delete_comments,
                )?,
                locations: try_load(&lookup, "PORTFOLIO_LOCATIONS_PATH", &defaults.locations)?,
            },
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            PortfolioError::Config(format!("invalid {key}: {e}"))
        })
}
