//! 대시보드 조회 서비스.
//!
//! 세션 확인 → 계좌 스냅샷 조회 → 선택 컬렉션 뷰 구성의 순서로 동작합니다.

use prophub_analytics::{build_dashboard, DashboardView};
use prophub_core::{account_span, Collection, ProphubError, ProphubResult, Session};
use prophub_data::{fetch_snapshot, CollectionSource};
use tracing::Instrument;

/// 계좌의 대시보드 뷰를 조회합니다.
///
/// 인증되지 않은 세션은 데이터를 조회하기 전에 거부됩니다.
pub async fn load_dashboard(
    source: &dyn CollectionSource,
    session: &Session,
    account: &str,
    collection: Collection,
) -> ProphubResult<DashboardView> {
    session.require_authenticated()?;

    let account = account.trim();
    if account.is_empty() {
        return Err(ProphubError::InvalidInput(
            "account number is required".to_string(),
        ));
    }

    let span = account_span!("load_dashboard", account, collection.slug());
    async {
        let snapshot = fetch_snapshot(source, account).await;
        build_dashboard(session, &snapshot, collection)
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sample_source;

    #[tokio::test]
    async fn test_unauthenticated_session_never_fetches() {
        let source = sample_source().with_failure(Collection::TradingHistory);
        let err = load_dashboard(&source, &Session::new(), "42", Collection::TradingHistory)
            .await
            .unwrap_err();
        assert!(matches!(err, ProphubError::Auth(_)));
    }

    #[tokio::test]
    async fn test_blank_account_rejected() {
        let session = Session::from_verified_token();
        let err = load_dashboard(&sample_source(), &session, "  ", Collection::Pnl)
            .await
            .unwrap_err();
        assert!(matches!(err, ProphubError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_notice() {
        let source = sample_source().with_failure(Collection::Balance);
        let session = Session::from_verified_token();

        let view = load_dashboard(&source, &session, "42", Collection::TradingHistory)
            .await
            .unwrap();

        assert_eq!(view.view.total_rows, 2);
        assert_eq!(view.view.notices.len(), 1);
        assert!(view.view.notices[0].message.contains("Balance"));
        assert_eq!(view.account_info.unwrap().broker, "Genial");
    }
}
