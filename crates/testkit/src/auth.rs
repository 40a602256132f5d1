use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::StubError;
use crate::state::{RequestRecord, StubState};

/// Extractor that rejects requests without a token issued by this stub.
pub struct RequireToken;

fn bearer(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<StubState> for RequireToken {
    type Rejection = StubError;

    async fn from_request_parts(parts: &mut Parts, state: &StubState) -> Result<Self, Self::Rejection> {
        match bearer(parts) {
            Some(token) if state.is_valid_token(token).await => Ok(RequireToken),
            _ => {
                warn!(path = %parts.uri.path(), "rejected unauthenticated request");
                Err(StubError::Unauthorized)
            }
        }
    }
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub token: String,
    pub token_type: &'static str,
}

pub async fn login(State(state): State<StubState>, Json(input): Json<LoginInput>) -> Result<Json<LoginOutput>, StubError> {
    let creds = state.credentials();
    if input.username != creds.username || input.password != creds.password {
        return Err(StubError::BadCredentials);
    }
    if state.login_token_blanked() {
        return Ok(Json(LoginOutput { token: String::new(), token_type: "bearer" }));
    }
    let token = state.issue_token().await;
    info!(username = %input.username, "stub login");
    Ok(Json(LoginOutput { token, token_type: "bearer" }))
}

/// Middleware recording every request for later assertions.
pub async fn record_request(State(state): State<StubState>, req: Request, next: Next) -> Response {
    state.record(RequestRecord {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        bearer: req.headers().contains_key(AUTHORIZATION),
    });
    next.run(req).await
}
