//! Calling-domain extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, HeaderName, header};
use std::str::FromStr;
use url::Url;

/// Default header read in [`DomainSource::Header`] mode.
pub const DEFAULT_DOMAIN_HEADER: &str = "x-domain";

/// Where the calling site's domain is read from.
///
/// The two modes also differ in how they reject callers: origin mode answers
/// 400, header mode treats the header as a credential and answers 401.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DomainSource {
    /// Host of the `Origin` URL, falling back to `Referer`.
    #[default]
    Origin,
    /// Value of a custom header, taken verbatim.
    Header(HeaderName),
}

impl DomainSource {
    /// Builds a source from the `DOMAIN_SOURCE` / `DOMAIN_HEADER` settings.
    ///
    /// # Errors
    ///
    /// Returns a message if `mode` is unknown or `header` is not a valid
    /// header name.
    pub fn from_settings(mode: &str, header: &str) -> Result<Self, String> {
        match mode.to_ascii_lowercase().as_str() {
            "origin" => Ok(DomainSource::Origin),
            "header" => HeaderName::from_str(header)
                .map(DomainSource::Header)
                .map_err(|_| format!("DOMAIN_HEADER '{header}' is not a valid header name")),
            other => Err(format!(
                "DOMAIN_SOURCE must be 'origin' or 'header', got '{other}'"
            )),
        }
    }

    /// Extracts the calling domain.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] (origin mode) or
    /// [`AppError::Unauthorized`] (header mode) when no domain can be
    /// determined.
    pub fn extract(&self, headers: &HeaderMap) -> Result<String, AppError> {
        match self {
            DomainSource::Origin => domain_from_origin(headers)
                .ok_or_else(|| AppError::bad_request("Unable to determine request domain")),
            DomainSource::Header(name) => headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| AppError::unauthorized(format!("Missing {name} header"))),
        }
    }

    /// Adapts a routing failure to this source's rejection style.
    ///
    /// In header mode an unknown domain is an authorization failure rather
    /// than a bad request. Other errors pass through unchanged.
    pub fn reject(&self, err: AppError) -> AppError {
        match (self, err) {
            (DomainSource::Header(_), AppError::DomainNotFound { domain }) => {
                AppError::unauthorized(format!("Domain {domain} is not authorized"))
            }
            (_, err) => err,
        }
    }
}

/// Reads `Origin`, then `Referer`, and returns the first parseable host.
///
/// Empty values are skipped. Non-default ports are kept (`localhost:3000`).
fn domain_from_origin(headers: &HeaderMap) -> Option<String> {
    [header::ORIGIN, header::REFERER]
        .iter()
        .filter_map(|name| headers.get(name))
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .and_then(host_of)
}

fn host_of(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;

    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
