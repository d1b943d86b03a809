//! Axum용 세션 인증 추출기.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use prophub_core::Session;

use super::jwt::{decode_token, JwtError};
use crate::error::ApiErrorResponse;
use crate::state::AppState;

/// 세션 인증 추출기.
///
/// `Authorization: Bearer <token>` 헤더의 세션 토큰을 검증하고
/// 인증된 [`Session`]을 돌려줍니다.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(SessionAuth(session): SessionAuth) -> impl IntoResponse {
///     session.require_authenticated()?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionAuth(pub Session);

/// 세션 인증 에러.
#[derive(Debug, thiserror::Error)]
pub enum SessionAuthError {
    #[error("Login required")]
    MissingToken,
    #[error("Invalid Authorization header")]
    InvalidAuthHeader,
    #[error("Session expired, please log in again")]
    TokenExpired,
    #[error("Invalid session token")]
    InvalidToken,
}

impl SessionAuthError {
    pub fn code(&self) -> &'static str {
        match self {
            SessionAuthError::MissingToken => "MISSING_TOKEN",
            SessionAuthError::InvalidAuthHeader => "INVALID_AUTH_HEADER",
            SessionAuthError::TokenExpired => "TOKEN_EXPIRED",
            SessionAuthError::InvalidToken => "INVALID_TOKEN",
        }
    }
}

impl IntoResponse for SessionAuthError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorResponse::new(self.code(), self.to_string()));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

impl FromRequestParts<Arc<AppState>> for SessionAuth {
    type Rejection = SessionAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(SessionAuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(SessionAuthError::InvalidAuthHeader)?;

        decode_token(token, state.jwt_secret()).map_err(|e| match e {
            JwtError::TokenExpired => SessionAuthError::TokenExpired,
            _ => SessionAuthError::InvalidToken,
        })?;

        Ok(SessionAuth(Session::from_verified_token()))
    }
}
