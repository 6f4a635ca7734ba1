//! Stateless HTTP request builder and response parser for the countries API.
//!
//! # Design
//! `CountriesClient` holds only a `base_url` and carries no mutable state
//! between calls. Every lookup shares one request shape and one response
//! shape, so there is a single `build_request` driven by `Lookup` and a
//! single `parse_countries`. The caller (or `HttpClient`) executes the
//! actual HTTP round-trip between the two.

use tracing::warn;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::Lookup;
use crate::types::Country;

/// Synchronous, stateless client for the countries API.
#[derive(Debug, Clone)]
pub struct CountriesClient {
    base_url: String,
}

impl CountriesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the GET request for `lookup`, optionally restricted to `fields`.
    ///
    /// Fails with `ApiError::EmptyCodes` for `Lookup::Codes(&[])`.
    pub fn build_request(
        &self,
        lookup: Lookup<'_>,
        fields: &[&str],
    ) -> Result<HttpRequest, ApiError> {
        let path = lookup.path(fields).inspect_err(|e| warn!(%e, "rejected lookup"))?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Decode a lookup response into country records.
    pub fn parse_countries(&self, response: HttpResponse) -> Result<Vec<Country>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| {
            warn!(error = %e, "error deserializing countries response");
            ApiError::Decode(e)
        })
    }
}

/// Anything but 200 is an error carrying the status line and body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    warn!(
        status = response.status,
        status_text = %response.status_text,
        "unsuccessful countries API call"
    );
    Err(ApiError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
        body: response.body.clone(),
    })
}
