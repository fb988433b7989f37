//! REST API helpers for communicating with the analysis server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, plus a raw
//! `XMLHttpRequest` for uploads so progress events are available.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Only the
//! registration status is ever shown to the user; everything else is logged
//! by the caller and leaves the UI as it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DesignPage, DesignResult, UserInfo};
use crate::state::tradespace::TableQuery;

const CURRENT_USER_ENDPOINT: &str = "/users/me";
const LOGIN_ENDPOINT: &str = "/login";
const REGISTER_ENDPOINT: &str = "/register";
const LOGOUT_ENDPOINT: &str = "/logout";
const DESIGNS_ENDPOINT: &str = "/designs/";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn design_endpoint(design_id: &str) -> String {
    format!("{DESIGNS_ENDPOINT}{design_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Registration reuses the passcode as the account password.
#[cfg(any(test, feature = "hydrate"))]
fn register_payload(email: &str, passcode: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": passcode, "passcode": passcode })
}

#[cfg(any(test, feature = "hydrate"))]
fn login_form(email: &str, passcode: &str) -> [(&'static str, String); 2] {
    [("username", email.to_owned()), ("password", passcode.to_owned())]
}

#[cfg(feature = "hydrate")]
fn network(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(decode)
}

/// Fetch the logged-in user from `GET /users/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = CURRENT_USER_ENDPOINT;
        None
    }
}

/// Start a session via form-encoded `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(email: &str, passcode: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|e| network(format!("{e:?}")))?;
        for (key, value) in login_form(email, passcode) {
            form.append(key, &value);
        }
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, passcode, LOGIN_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns `ApiError::Status` with the server's status (400 for a wrong
/// passcode, 422 for an invalid email) or a network error.
pub async fn register(email: &str, passcode: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&register_payload(email, passcode))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, passcode, REGISTER_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /logout`.
///
/// # Errors
///
/// Returns an error if the request fails or is rejected.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = LOGOUT_ENDPOINT;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one evaluated design from `GET /designs/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body does not
/// parse as a design.
pub async fn fetch_design(design_id: &str) -> Result<DesignResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&design_endpoint(design_id))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = design_id;
        Err(ApiError::Unavailable)
    }
}

/// Delete a design via `DELETE /designs/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or is rejected.
pub async fn delete_design(design_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&design_endpoint(design_id))
            .send()
            .await
            .map_err(network)?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = design_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one table page from `GET /designs/` with paged-list parameters.
///
/// # Errors
///
/// Returns an error if the request fails, is rejected, or the body does not
/// parse as a page.
pub async fn list_designs(query: &TableQuery) -> Result<DesignPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = query.to_params();
        let resp = gloo_net::http::Request::get(DESIGNS_ENDPOINT)
            .query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, DESIGNS_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Upload a `.io` model as multipart field `file` to `POST /designs/`.
///
/// `on_progress` receives the percent sent so far. Resolves once the
/// request finishes, whatever the outcome.
///
/// # Errors
///
/// Returns an error if the upload fails, is rejected, or the body does not
/// parse as a design.
#[cfg(feature = "hydrate")]
pub async fn upload_design(file: web_sys::File, on_progress: impl Fn(f64) + 'static) -> Result<DesignResult, ApiError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    use crate::util::upload::progress_percent;

    let js = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(js)?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(js)?;
    let xhr = web_sys::XmlHttpRequest::new().map_err(js)?;
    xhr.open("POST", DESIGNS_ENDPOINT).map_err(js)?;

    let progress = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |event: web_sys::ProgressEvent| {
        if event.length_computable() {
            on_progress(progress_percent(event.loaded(), event.total()));
        }
    });
    let upload = xhr.upload().map_err(js)?;
    upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let (tx, rx) = oneshot::channel::<()>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let done = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(());
        }
    });
    xhr.set_onloadend(Some(done.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form)).map_err(js)?;
    let finished = rx.await;

    upload.set_onprogress(None);
    xhr.set_onloadend(None);
    drop((progress, done));
    finished.map_err(|_| ApiError::Network("upload abandoned".to_owned()))?;

    let status = xhr.status().map_err(js)?;
    if status == 0 {
        return Err(ApiError::Network("upload failed".to_owned()));
    }
    check_status(status)?;
    let text = xhr.response_text().map_err(js)?.unwrap_or_default();
    serde_json::from_str(&text).map_err(decode)
}
