//! Base URL validation.
//!
//! Every endpoint path is joined onto one base URL, so the base is checked
//! once, up front:
//! - http or https scheme only
//! - a host must be present
//! - no credentials, query string or fragment

use url::Url;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is malformed or cannot be parsed
    InvalidUrl(String),
    /// URL uses a scheme other than http/https
    UnsupportedScheme(String),
    /// URL has no host component
    MissingHost,
    /// URL carries parts that cannot be part of a base (credentials, query, fragment)
    NotABase(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlValidationError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            UrlValidationError::UnsupportedScheme(scheme) => {
                write!(f, "Only http and https URLs are allowed, got {}", scheme)
            }
            UrlValidationError::MissingHost => write!(f, "URL has no host"),
            UrlValidationError::NotABase(part) => {
                write!(f, "Base URL must not contain a {}", part)
            }
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Validate the server base URL.
///
/// # Returns
/// * `Ok(Url)` - The parsed base, with a trailing slash on its path
/// * `Err(UrlValidationError)` - If validation fails
pub fn validate_base_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let mut url =
        Url::parse(url_str.trim()).map_err(|e| UrlValidationError::InvalidUrl(e.to_string()))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(UrlValidationError::UnsupportedScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(UrlValidationError::NotABase("credentials".to_string()));
    }
    if url.query().is_some() {
        return Err(UrlValidationError::NotABase("query string".to_string()));
    }
    if url.fragment().is_some() {
        return Err(UrlValidationError::NotABase("fragment".to_string()));
    }

    // Url::join drops the last path segment unless it ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Join an endpoint path onto a validated base. Leading slashes on `path`
/// are relative to the base path, not to the host root.
pub fn endpoint_url(base: &Url, path: &str) -> Result<Url, UrlValidationError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| UrlValidationError::InvalidUrl(e.to_string()))
}
