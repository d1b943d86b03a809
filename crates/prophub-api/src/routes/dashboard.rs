//! 대시보드 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/v1/collections` - 선택 가능한 컬렉션 목록
//! - `GET /api/v1/accounts/{account}/collections/{collection}` - 컬렉션 대시보드 뷰 (인증 필요)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use prophub_analytics::DashboardView;
use prophub_core::Collection;
use serde::{Deserialize, Serialize};

use crate::auth::SessionAuth;
use crate::error::{domain_error, ApiErrorResponse, ApiResult};
use crate::services::load_dashboard;
use crate::state::AppState;

/// 컬렉션 메뉴 항목.
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionItem {
    pub slug: String,
    pub title: String,
    pub icon: String,
}

impl From<Collection> for CollectionItem {
    fn from(collection: Collection) -> Self {
        Self {
            slug: collection.slug().to_string(),
            title: collection.title().to_string(),
            icon: collection.icon().to_string(),
        }
    }
}

/// 컬렉션 목록 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionsResponse {
    pub collections: Vec<CollectionItem>,
    /// 계좌 입력란 기본값
    pub default_account: String,
}

/// 선택 가능한 컬렉션 목록 (메뉴 순서).
///
/// GET /api/v1/collections
pub async fn list_collections(State(state): State<Arc<AppState>>) -> Json<CollectionsResponse> {
    Json(CollectionsResponse {
        collections: Collection::SELECTABLE.into_iter().map(Into::into).collect(),
        default_account: state.default_account.clone(),
    })
}

/// 컬렉션 대시보드 뷰.
///
/// GET /api/v1/accounts/{account}/collections/{collection}
pub async fn get_collection_view(
    State(state): State<Arc<AppState>>,
    SessionAuth(session): SessionAuth,
    Path((account, collection)): Path<(String, String)>,
) -> ApiResult<Json<DashboardView>> {
    let collection: Collection = collection
        .parse()
        .ok()
        .filter(Collection::is_selectable)
        .ok_or_else(|| {
            ApiErrorResponse::new(
                "INVALID_COLLECTION",
                format!("Unknown collection: {}", collection),
            )
            .into_rejection(StatusCode::NOT_FOUND)
        })?;

    load_dashboard(state.source.as_ref(), &session, &account, collection)
        .await
        .map(Json)
        .map_err(domain_error)
}

/// 대시보드 라우터 생성.
pub fn dashboard_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/collections", get(list_collections))
        .route(
            "/accounts/{account}/collections/{collection}",
            get(get_collection_view),
        )
}
