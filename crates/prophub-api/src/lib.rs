//! PropHub 대시보드 REST API.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - 비밀번호 로그인과 JWT 세션 토큰
//! - 계좌/컬렉션별 대시보드 뷰
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 세션 토큰 발급과 검증
//! - [`services`]: 대시보드 조회 로직
//! - [`error`]: 통합 에러 응답

pub mod auth;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

pub use auth::{Claims, SessionAuth, SessionAuthError, TokenResponse};
pub use error::{ApiErrorResponse, ApiResult};
pub use routes::create_api_router;
pub use state::AppState;
