//! REST client for the remote user-management API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Network`] since the
//! API is only reachable from the browser session.
//!
//! ARCHITECTURE
//! ============
//! Every request passes through two interception points. Before sending, the
//! bearer token is read from the session store and attached. After the
//! response arrives, a 401 clears the session store and fires the
//! `on_unauthorized` handler, which the auth context installs so in-memory
//! state and storage collapse together. The client never navigates.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`ApiError`]; pages turn them into inline
//! messages with [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Deserialize;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::types::{LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, User, UserListQuery, UserPatch};
use crate::util::session_store::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::session_store::LocalStorageStore;

/// API base URL used when `CONECTAR_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Status the API returns for a missing, expired, or rejected token.
pub const UNAUTHORIZED: u16 = 401;

/// Errors surfaced by [`ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response reached the client.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Request { status: u16, message: Option<String> },
    /// The request could not be built (for example, the body failed to
    /// serialize). Nothing was sent.
    #[error("could not build request: {0}")]
    Encode(String),
    /// A success response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a request error from a failed response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Request { status, message: extract_error_message(body) }
    }

    /// HTTP status, when the server responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Network(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }

    /// The server's message when it sent one, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Request { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
}

/// Validation failures arrive as a list of messages; everything else as one.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        ErrorMessage::One(message) => message,
        ErrorMessage::Many(messages) => messages.join(", "),
    };
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_owned())
}

fn parse_body<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    let raw = if raw.trim().is_empty() { "null" } else { raw };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Serialize an optional JSON body before anything is sent.
fn encode_body<B: Serialize>(body: Option<&B>) -> Result<Option<String>, ApiError> {
    body.map(serde_json::to_string).transpose().map_err(|e| ApiError::Encode(e.to_string()))
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn user_endpoint(user_id: &str) -> String {
    format!("/users/{user_id}")
}

/// `Authorization` header value for `token`. Empty tokens send no header.
#[must_use]
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Response interception: on 401, drop the cached session.
///
/// Returns `true` when the status signalled an authentication failure.
pub fn intercept_response<S: SessionStore>(status: u16, store: &mut S) -> bool {
    if status != UNAUTHORIZED {
        return false;
    }
    store.clear();
    true
}

/// HTTP verbs used against the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Handle for talking to the API, shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    on_unauthorized: Option<Callback<()>>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), on_unauthorized: None }
    }

    /// Client for the base URL baked in at build time via `CONECTAR_API_URL`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CONECTAR_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Install the handler fired after a 401 has cleared the session store.
    #[must_use]
    pub fn on_unauthorized(mut self, handler: Callback<()>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Apply response interception and notify the subscriber on 401.
    #[cfg(any(test, feature = "hydrate"))]
    fn observe_status<S: SessionStore>(&self, status: u16, store: &mut S) -> bool {
        if !intercept_response(status, store) {
            return false;
        }
        #[cfg(feature = "hydrate")]
        log::warn!("api answered {status}; cached session cleared");
        if let Some(handler) = self.on_unauthorized {
            handler.run(());
        }
        true
    }

    /// Send a request and return the raw success body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Encode`] when the request cannot be built,
    /// [`ApiError::Network`] when no response arrives, [`ApiError::Request`]
    /// for non-2xx statuses.
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            if !query.is_empty() {
                builder = builder.query(query.iter().copied());
            }
            if let Some(value) = authorization_header(LocalStorageStore.token().as_deref()) {
                builder = builder.header("Authorization", &value);
            }
            let request = match encode_body(body)? {
                Some(json) => builder.header("Content-Type", "application/json").body(json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            self.observe_status(status, &mut LocalStorageStore);
            if !resp.ok() {
                return Err(ApiError::from_response(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, query, body);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// Send a request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::send`] returns, plus [`ApiError::Decode`].
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let raw = self.send(method, path, query, body).await?;
        parse_body(&raw)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Get, path, query, None).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.request(Method::Post, path, &[], Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.request(Method::Patch, path, &[], Some(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Delete, path, &[], None).await
    }

    // =========================================================
    // Endpoints
    // =========================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection (bad credentials arrive as 401).
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post("/auth/login", credentials).await
    }

    /// `POST /auth/register`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection (e.g. email already taken).
    pub async fn register(&self, account: &RegisterRequest) -> Result<(), ApiError> {
        self.post::<_, IgnoredAny>("/auth/register", account).await.map(|_| ())
    }

    /// `GET /users/profile` for the bearer of the current token.
    ///
    /// # Errors
    ///
    /// Returns an error when the token is rejected or the API is unreachable.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.get("/users/profile", &[]).await
    }

    /// `PATCH /users/profile`. The response is decoded as a partial user so
    /// it can be merged into the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection (e.g. wrong current password).
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserPatch, ApiError> {
        self.patch("/users/profile", update).await
    }

    /// `GET /users` with optional role filter and sort.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the caller is not an admin.
    pub async fn list_users(&self, query: &UserListQuery) -> Result<Vec<User>, ApiError> {
        self.get("/users", &query.to_pairs()).await
    }

    /// `DELETE /users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete::<IgnoredAny>(&user_endpoint(user_id)).await.map(|_| ())
    }
}
