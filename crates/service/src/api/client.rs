//! HTTP client for the content REST API.
//!
//! Every call maps its failure to a fixed per-operation message; the
//! status, body or transport cause stays available on the [`ApiError`]
//! variant for logging.

use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::errors::ApiError;
use crate::session::Session;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    upload_base: String,
    session: Session,
}

impl ApiClient {
    /// Client for `base_url` (e.g. `http://host:8000/api`) with default transport settings.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, None, session)
    }

    /// Reuse an existing [`reqwest::Client`]. Uploads go to `upload_base`
    /// when given, otherwise under `base_url`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        upload_base: Option<String>,
        session: Session,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let upload_base = upload_base
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| base_url.clone());
        Self { http, base_url, upload_base, session }
    }

    pub fn from_config(cfg: &configs::ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|source| ApiError::Transport { message: "Failed to build HTTP client".into(), source })?;
        Ok(Self::with_client(http, cfg.base_url.clone(), Some(cfg.upload_base().to_string()), session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_base(&self) -> &str {
        &self.upload_base
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach `Authorization: Bearer <token>` when a session token exists.
    /// A token store failure is reported under the operation's `message`.
    pub(crate) async fn authorized(&self, req: RequestBuilder, message: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.session.get_token().await.map_err(|source| {
            warn!(op = message, error = %source, "token store unavailable");
            ApiError::token(message, source)
        })?;
        Ok(match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    /// Send and require a 2xx status.
    pub(crate) async fn send(req: RequestBuilder, message: &str) -> Result<Response, ApiError> {
        let response = req.send().await.map_err(|source| {
            warn!(op = message, error = %source, "request failed");
            ApiError::Transport { message: message.to_string(), source }
        })?;
        Self::ensure_success(response, message).await
    }

    async fn ensure_success(response: Response, message: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(op = message, status = status.as_u16(), %body, "non-success response");
            return Err(ApiError::status(message, status.as_u16(), body));
        }
        Ok(response)
    }

    /// Send, require success and decode a JSON body.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder, message: &str) -> Result<T, ApiError> {
        let response = Self::send(req, message).await?;
        response.json::<T>().await.map_err(|source| {
            warn!(op = message, error = %source, "unexpected response body");
            ApiError::Decode { message: message.to_string(), source }
        })
    }

    /// Exchange credentials for a token and store it in the session.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let req = self.http.post(self.url("auth/login")).json(&LoginRequest { username, password });
        let LoginResponse { token } = Self::fetch_json(req, "Login failed").await?;
        if token.trim().is_empty() {
            warn!(%username, "login response carried no token");
            return Err(ApiError::Invalid { message: "Login failed".into(), reason: "empty token".into() });
        }
        self.session.set_token(token).await.map_err(|source| ApiError::token("Login failed", source))?;
        info!(%username, "logged_in");
        Ok(())
    }

    /// Drop the stored token. The server is not contacted.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.session.clear_token().await?;
        Ok(())
    }

    /// `GET /health`; returns the reported status string.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String, ApiError> {
        let req = self.http.get(self.url("health"));
        let HealthResponse { status } = Self::fetch_json(req, "Failed to reach API").await?;
        Ok(status)
    }
}
