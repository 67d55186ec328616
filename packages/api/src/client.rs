//! # HTTP client bound to the GoBarber backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with the backend base URL and, once a
//! user has signed in, the session token which is sent as
//! `Authorization: Bearer <token>` on every request.
//!
//! The client is cheap to clone (`reqwest::Client` is reference counted), so the
//! auth context swaps clients with [`with_token`](ApiClient::with_token) and
//! [`without_token`](ApiClient::without_token) instead of mutating a shared one.
//!
//! Responses are read as text and decoded with `serde_json` so that a body that
//! does not match the model is reported as [`ApiError::Decode`] rather than a
//! transport error. Any non-2xx status becomes [`ApiError::Status`], carrying the
//! backend's `{"message": "..."}` when it sent one.

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::*;
use crate::Backend;

/// Error body returned by the backend on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// REST client for the GoBarber backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    /// Create an anonymous client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Url::join replaces the last segment unless the base ends with a slash.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::Url {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        })
    }

    /// A copy of this client that authenticates with `token`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    /// A copy of this client without credentials.
    pub fn without_token(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Url {
                url: path.to_string(),
                reason: e.to_string(),
            })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.url(path)?);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = Self::send(self.request(Method::GET, path)?.query(query)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let body = Self::send(self.request(Method::POST, path)?.json(payload)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST where the response body is irrelevant (often empty).
    async fn post<B: Serialize>(&self, path: &str, payload: &B) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, path)?.json(payload)).await?;
        Ok(())
    }
}

/// Pull the `message` out of an error body, if it has one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

impl Backend for ApiClient {
    async fn create_session(&self, credentials: &SessionRequest) -> Result<AuthData, ApiError> {
        self.post_json("/sessions", credentials).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.post("/users", user).await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.post("/password/forgot", request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.post("/password/reset", request).await
    }

    async fn month_availability(
        &self,
        provider_id: &str,
        query: MonthQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, ApiError> {
        let path = format!("/providers/{provider_id}/month-availability");
        self.get_json(&path, &query.params()).await
    }

    async fn appointments(&self, query: DayQuery) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("/appointments/me", &query.params()).await
    }
}
