//! Travis CI API client.
//!
//! Fetches the per-repository RSA public key used to encrypt secure
//! variables.

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{HttpError, Result};

/// Body of `GET /repos/<owner>/<repo>/key`.
#[derive(Debug, Deserialize)]
struct KeyResponse {
    #[serde(default)]
    key: Option<String>,
}

/// URL of the public key endpoint for a repository.
pub fn key_url(endpoint: &str, full_name: &str) -> String {
    format!("{}/repos/{}/key", endpoint.trim_end_matches('/'), full_name)
}

/// Fetch the PEM public key for `full_name`.
///
/// # Errors
///
/// Returns `HttpError::Request` on transport failure, `HttpError::Status`
/// on a non-success response and `HttpError::MissingKey` if the body has
/// no key.
pub fn fetch_key(endpoint: &str, full_name: &str) -> Result<String> {
    let url = key_url(endpoint, full_name);
    debug!(url = %url, "fetching travis public key");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("travis-heroku/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(HttpError::Request)?;

    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(HttpError::Request)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(HttpError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        }
        .into());
    }

    let body: KeyResponse = response.json().map_err(HttpError::Request)?;
    let key = body
        .key
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| HttpError::MissingKey(full_name.to_string()))?;

    debug!(key_len = key.len(), "travis public key fetched");
    Ok(key)
}
