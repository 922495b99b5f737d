use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_types::{ApiEnvelope, AppError, AuthUser, LoginRequest, RegisterRequest};

use crate::guard::IdentitySource;

/// HTTP client for the dashboard backend.
///
/// Every endpoint answers with a `{success, data, error}` envelope; any
/// transport error, non-2xx status, or `success: false` body is a failed
/// call. Credentials ride on cookies — the browser manages them on wasm,
/// a cookie store does natively.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: build_http(),
        }
    }

    /// Who is the current user, according to the session cookie.
    pub async fn me(&self) -> Result<AuthUser, AppError> {
        let request = self.http.get(self.url("/me"));
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|err| AppError::network(err.to_string()))?;
        read_envelope(response).await
    }

    /// Exchange credentials for a session; the backend sets the cookie.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthUser, AppError> {
        let request = self.http.post(self.url("/login")).json(credentials);
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|err| AppError::network(err.to_string()))?;
        read_envelope(response).await
    }

    /// Create an account; on success the backend opens a session for it.
    pub async fn register(&self, details: &RegisterRequest) -> Result<AuthUser, AppError> {
        let request = self.http.post(self.url("/register")).json(details);
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|err| AppError::network(err.to_string()))?;
        read_envelope(response).await
    }

    /// Tear down the session. Any non-2xx status is a failure.
    pub async fn logout(&self) -> Result<(), AppError> {
        let request = self.http.post(self.url("/logout"));
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|err| AppError::network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::from_status(status.as_u16(), None));
        }
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl IdentitySource for ApiClient {
    async fn current_user(&self) -> Result<AuthUser, AppError> {
        self.me().await
    }
}

/// Decode an envelope body, honoring the response status.
async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status().as_u16();
    let envelope: ApiEnvelope<T> = response.json().await.map_err(|err| {
        tracing::warn!("undecodable response body: {err}");
        AppError::from_status(status, None)
    })?;
    envelope.into_result(status)
}

fn build_http() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("cookie store unavailable, falling back: {err}");
                reqwest::Client::new()
            })
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

/// Ask the browser fetch to include cookies; a no-op natively, where the
/// client's cookie store covers it.
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}
