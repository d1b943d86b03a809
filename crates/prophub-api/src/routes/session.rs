//! 로그인 세션 endpoint.
//!
//! # 엔드포인트
//!
//! - `POST /api/v1/session/login` - 비밀번호 로그인, 세션 토큰 발급
//! - `GET /api/v1/session` - 현재 세션 상태 (인증 필요)

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use prophub_core::{ProphubError, Session, SessionState};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::{issue_session_token, SessionAuth, TokenResponse};
use crate::error::{domain_error, ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 로그인 요청.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// 세션 상태 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub state: SessionState,
    pub authenticated: bool,
}

/// 비밀번호 로그인.
///
/// POST /api/v1/session/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let mut session = Session::new();

    if let Err(err) = state.gate.submit(&mut session, &request.password) {
        return Err(match err {
            ProphubError::Auth(message) => ApiErrorResponse::new("INVALID_PASSWORD", message)
                .into_rejection(StatusCode::UNAUTHORIZED),
            other => domain_error(other),
        });
    }

    issue_session_token(state.jwt_secret(), state.token_ttl_minutes)
        .map(Json)
        .map_err(|e| {
            error!(error = %e, "Failed to issue session token");
            ApiErrorResponse::new("TOKEN_ERROR", "Failed to issue session token")
                .into_rejection(StatusCode::INTERNAL_SERVER_ERROR)
        })
}

/// 현재 세션 상태.
///
/// GET /api/v1/session
pub async fn session_status(SessionAuth(session): SessionAuth) -> Json<SessionStatusResponse> {
    Json(SessionStatusResponse {
        state: session.state(),
        authenticated: session.is_authenticated(),
    })
}

/// 세션 라우터 생성.
pub fn session_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(session_status))
        .route("/login", post(login))
}
