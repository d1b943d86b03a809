//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다.

use axum::http::StatusCode;
use axum::Json;
use prophub_core::ProphubError;
use serde::{Deserialize, Serialize};

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "INVALID_PASSWORD",
///   "message": "Invalid password.",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "INVALID_PASSWORD", "INVALID_COLLECTION")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 에러 발생 타임스탬프 (Unix timestamp, 선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 상태 코드와 함께 핸들러 에러로 변환.
    pub fn into_rejection(self, status: StatusCode) -> (StatusCode, Json<ApiErrorResponse>) {
        (status, Json(self))
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// 도메인 에러를 HTTP 에러 응답으로 변환합니다.
pub fn domain_error(err: ProphubError) -> (StatusCode, Json<ApiErrorResponse>) {
    let (status, code) = match &err {
        ProphubError::Auth(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ProphubError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        ProphubError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };

    // 내부 에러는 메시지를 숨김
    if !err.is_user_facing() {
        tracing::error!(error = %err, "Internal error");
        return ApiErrorResponse::new(code, "Internal server error").into_rejection(status);
    }

    let message = match err {
        ProphubError::Auth(msg) | ProphubError::InvalidInput(msg) | ProphubError::Config(msg) => msg,
    };

    ApiErrorResponse::new(code, message).into_rejection(status)
}

/// API 핸들러 결과 타입.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;
