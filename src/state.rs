//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds one pooled HTTP client for every upstream call and the upstream
//! base URL. Clone is cheap: the client is reference counted internally.

use std::sync::Arc;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Analysis server base URL, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the shared client from host config.
    ///
    /// Redirects are not followed so `Location` reaches the browser as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.upstream_url.as_str()) })
    }
}
