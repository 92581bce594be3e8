//! Backend REST Bindings
//!
//! Typed request wrappers over the portal's JSON API, organized by domain.
//! Every call attaches the bearer token when one is stored and maps
//! failures into the [`ApiError`] taxonomy.

mod auth;
mod community;
mod posts;
mod projects;
mod users;

pub use auth::*;
pub use community::*;
pub use posts::*;
pub use projects::*;
pub use users::*;

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage;

const API_BASE: &str = "/api";

/// Request failures as the call sites distinguish them
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure, no response at all
    Network(String),
    /// Error response; `message` is server-supplied when the body carried
    /// one, otherwise a generic fallback
    Http { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Http { status, message } => write!(f, "{} ({})", message, status),
            ApiError::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

/// Shape of the backend's error bodies
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Percent-encode a value used as a path segment
pub(crate) fn seg(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn bearer(builder: RequestBuilder) -> RequestBuilder {
    match storage::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turn a non-2xx response into an `ApiError::Http`
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("request failed with status {}", status),
    };
    Err(ApiError::Http { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = bearer(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = bearer(Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST with an empty body (toggle-style endpoints)
pub(crate) async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = bearer(Request::post(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = bearer(Request::put(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub(crate) async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = bearer(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// DELETE where the response body carries nothing the client needs
pub(crate) async fn delete_ok(path: &str) -> Result<(), ApiError> {
    let response = bearer(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await.map(|_| ())
}

/// Multipart upload (avatar); the browser sets the boundary header itself
pub(crate) async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = bearer(Request::post(&url(path)))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}
