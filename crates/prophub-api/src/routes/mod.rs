//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/v1/session` - 로그인, 세션 상태
//! - `/api/v1/collections` - 컬렉션 메뉴
//! - `/api/v1/accounts/{account}/collections/{collection}` - 컬렉션 대시보드 뷰

pub mod dashboard;
pub mod health;
pub mod session;

pub use dashboard::{dashboard_router, CollectionItem, CollectionsResponse};
pub use health::{health_router, HealthResponse};
pub use session::{session_router, LoginRequest, SessionStatusResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // API v1 엔드포인트
        .nest("/api/v1/session", session_router())
        .nest("/api/v1", dashboard_router())
}
