//! The HTTP gateway
//!
//! One shared wrapper over `reqwest::Client` that every adapter goes
//! through. It attaches the bearer token from the session context, decodes
//! JSON into the caller's type, and maps non-2xx responses to `PortError`,
//! carrying the backend's own message when the body has one.
//!
//! On a 401 the stored session is cleared before the error is returned;
//! the application layer treats the resulting `Unauthorized` as its
//! redirect-to-login signal.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use auth_session::SessionContext;
use core_kernel::PortError;

use crate::endpoints::ServiceEndpoints;

/// Default request timeout, matching the portal's long-standing 30 s cap
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP gateway for all backend adapters
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoints: ServiceEndpoints,
    session: SessionContext,
}

impl HttpGateway {
    /// Builds a gateway with the default timeout
    pub fn new(endpoints: ServiceEndpoints, session: SessionContext) -> Result<Self, PortError> {
        Self::with_timeout(endpoints, session, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Builds a gateway with an explicit timeout
    pub fn with_timeout(
        endpoints: ServiceEndpoints,
        session: SessionContext,
        timeout: Duration,
    ) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PortError::Internal {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoints,
            session,
        })
    }

    pub fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// GET with bearer auth, decoding the JSON response
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, PortError> {
        let request = self.client.get(url);
        self.execute(self.authorize(request)?, "GET", url).await
    }

    /// GET with bearer auth and query parameters
    pub async fn get_with_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<T, PortError> {
        let request = self.client.get(url).query(query);
        self.execute(self.authorize(request)?, "GET", url).await
    }

    /// POST with bearer auth and a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, PortError> {
        let request = self.client.post(url).json(body);
        self.execute(self.authorize(request)?, "POST", url).await
    }

    /// POST without attaching a token; for login and OTP endpoints
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, PortError> {
        let request = self.client.post(url).json(body);
        self.execute(request, "POST", url).await
    }

    /// PUT with bearer auth and a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, PortError> {
        let request = self.client.put(url).json(body);
        self.execute(self.authorize(request)?, "PUT", url).await
    }

    /// DELETE with bearer auth
    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, PortError> {
        let request = self.client.delete(url);
        self.execute(self.authorize(request)?, "DELETE", url).await
    }

    /// POST a file as multipart form data; for bulk-upload endpoints
    ///
    /// The file is passed through opaque: parsing and row validation are
    /// the backend's job.
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        url: &str,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<T, PortError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|e| PortError::transformation(format!("invalid content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self.client.post(url).multipart(form);
        self.execute(self.authorize(request)?, "POST", url).await
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, PortError> {
        let token = self
            .session
            .token()
            .map_err(|e| PortError::internal(format!("session read failed: {e}")))?
            .ok_or_else(|| PortError::unauthorized("No authentication token available"))?;
        Ok(request.bearer_auth(token))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<T, PortError> {
        tracing::debug!(method, url, "dispatching request");

        let response = request.send().await.map_err(|e| self.map_transport(e, method, url))?;
        let status = response.status();

        if status.is_success() {
            let value = response.json::<T>().await.map_err(|e| {
                PortError::transformation(format!("failed to decode {method} {url}: {e}"))
            })?;
            tracing::debug!(method, url, status = status.as_u16(), "request succeeded");
            return Ok(value);
        }

        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();
        let message = extract_backend_message(&body)
            .unwrap_or_else(|| format!("HTTP {}: {method} {url}", status.as_u16()));

        tracing::warn!(method, url, status = status.as_u16(), %message, "request failed");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Global side effect: drop the stored credentials so the next
            // screen load goes to login
            if let Err(e) = self.session.clear() {
                tracing::error!(error = %e, "failed to clear session after 401");
            }
        }

        Err(map_status(status, message, retry_after))
    }

    fn map_transport(&self, error: reqwest::Error, method: &str, url: &str) -> PortError {
        if error.is_timeout() {
            return PortError::Timeout {
                operation: format!("{method} {url}"),
                duration_ms: DEFAULT_TIMEOUT_SECS * 1000,
            };
        }
        PortError::Connection {
            message: format!("{method} {url} failed: {error}"),
            source: Some(Box::new(error)),
        }
    }
}

/// Pulls the backend's own error message out of a failure body
///
/// The backends answer failures as `{"error": "..."}` or
/// `{"message": "..."}`; anything else falls back to a generic message.
fn extract_backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "message"] {
        if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
            if !message.is_empty() {
                return Some(message.to_string());
            }
        }
    }
    None
}

/// Maps an HTTP status to the shared error taxonomy
fn map_status(
    status: reqwest::StatusCode,
    message: String,
    retry_after: Option<u64>,
) -> PortError {
    use reqwest::StatusCode;

    match status {
        StatusCode::NOT_FOUND => PortError::NotFound {
            entity_type: "resource".to_string(),
            id: message,
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortError::Unauthorized { message },
        StatusCode::CONFLICT => PortError::Conflict { message },
        StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => PortError::Validation {
            message,
            field: None,
        },
        StatusCode::TOO_MANY_REQUESTS => PortError::RateLimited {
            retry_after_secs: retry_after.unwrap_or(60),
        },
        s if s.is_server_error() => PortError::ServiceUnavailable { service: message },
        _ => PortError::internal(message),
    }
}
