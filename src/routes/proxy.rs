//! Same-origin proxy to the analysis server.
//!
//! DESIGN
//! ======
//! Requests are forwarded with their method, path and query unchanged. Only
//! an allow-list of headers crosses in either direction, so hop-by-hop and
//! host-specific headers never leak. Redirects are passed back to the
//! browser rather than followed.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the upstream call.
pub static REQUEST_HEADERS: [HeaderName; 4] =
    [header::COOKIE, header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];

/// Response headers copied back to the browser.
pub static RESPONSE_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::SET_COOKIE, header::LOCATION];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
    #[error("upstream timed out")]
    Timeout,
    #[error("upstream response unreadable: {0}")]
    BadResponse(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unreachable(_) | ProxyError::BadResponse(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn from_send(err: &reqwest::Error) -> Self {
        if err.is_timeout() { ProxyError::Timeout } else { ProxyError::Unreachable(err.to_string()) }
    }

    fn from_read(err: &reqwest::Error) -> Self {
        if err.is_timeout() { ProxyError::Timeout } else { ProxyError::BadResponse(err.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (self.status(), self.to_string()).into_response()
    }
}

/// Join the upstream base with the request's path and query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Copy every value of each allowed header, preserving repeats.
pub fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Forward one browser request upstream and relay the response.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    tracing::debug!(%method, %url, bytes = body.len(), "proxying");

    let resp = state
        .http
        .request(method, &url)
        .headers(filter_headers(&headers, &REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::from_send(&e))?;

    let status = resp.status();
    let relayed = filter_headers(resp.headers(), &RESPONSE_HEADERS);
    let bytes = resp.bytes().await.map_err(|e| ProxyError::from_read(&e))?;
    if status.is_server_error() {
        tracing::warn!(%status, %url, "upstream error");
    }
    Ok((status, relayed, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
