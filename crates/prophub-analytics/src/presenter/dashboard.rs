//! 대시보드 뷰 (파이프라인 진입점).

use prophub_core::{Collection, ProphubError, ProphubResult, Session};
use prophub_data::{AccountInfo, AccountSnapshot};
use serde::Serialize;
use tracing::info;

use super::charts::Notice;
use super::{present, CollectionView};

/// 계좌 대시보드 뷰.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub account: String,
    /// 상단 계좌 정보 카드 (계좌 정보가 없으면 null)
    pub account_info: Option<AccountInfo>,
    #[serde(flatten)]
    pub view: CollectionView,
}

/// 인증된 세션에서 스냅샷의 선택 컬렉션 뷰를 만듭니다.
///
/// 조회 경고는 모두 알림으로 앞에 붙습니다.
pub fn build_dashboard(
    session: &Session,
    snapshot: &AccountSnapshot,
    collection: Collection,
) -> ProphubResult<DashboardView> {
    session.require_authenticated()?;

    if !collection.is_selectable() {
        return Err(ProphubError::InvalidInput(format!(
            "collection is not selectable: {}",
            collection.slug()
        )));
    }

    let mut view = match snapshot.table_ref(collection) {
        Some(table) => present(collection, table),
        None => present(collection, &Default::default()),
    };

    let mut notices: Vec<Notice> = snapshot
        .warnings()
        .iter()
        .map(|w| Notice::warning(w.message.clone()))
        .collect();
    notices.append(&mut view.notices);
    view.notices = notices;

    info!(
        account = %snapshot.account,
        collection = collection.slug(),
        rows = view.total_rows,
        panels = view.panels.len(),
        "Dashboard view built"
    );

    Ok(DashboardView {
        account: snapshot.account.clone(),
        account_info: snapshot.account_info(),
        view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prophub_core::Table;
    use serde_json::json;

    fn snapshot() -> AccountSnapshot {
        let mut snapshot = AccountSnapshot::new("42");
        snapshot.insert(
            Collection::TradingHistory,
            Table::from_json(json!([{"Asset": "WIN"}])),
        );
        snapshot.insert(
            Collection::AccountInfo,
            Table::from_json(json!([{"status": "active"}])),
        );
        snapshot
    }

    #[test]
    fn test_unauthenticated_session_is_rejected() {
        let err = build_dashboard(&Session::new(), &snapshot(), Collection::TradingHistory)
            .unwrap_err();
        assert!(matches!(err, ProphubError::Auth(_)));
    }

    #[test]
    fn test_account_info_is_not_selectable() {
        let session = Session::from_verified_token();
        let err = build_dashboard(&session, &snapshot(), Collection::AccountInfo).unwrap_err();
        assert!(matches!(err, ProphubError::InvalidInput(_)));
    }

    #[test]
    fn test_dashboard_carries_account_info() {
        let session = Session::from_verified_token();
        let dashboard = build_dashboard(&session, &snapshot(), Collection::TradingHistory).unwrap();

        assert_eq!(dashboard.account, "42");
        assert_eq!(dashboard.account_info.unwrap().status, "active");
        assert_eq!(dashboard.view.total_rows, 1);
        assert_eq!(dashboard.view.panels[0].heading, "Trades by Asset");
    }
}
