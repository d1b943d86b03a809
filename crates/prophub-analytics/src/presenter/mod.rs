//! 컬렉션 뷰 구성.
//!
//! 선택된 컬렉션의 테이블을 변환하고, 컬럼 존재 여부에 따라 적용할 분석을 골라
//! 패널 목록으로 만듭니다.
//!
//! - [`charts`]: 차트 명세, 패널, 알림
//! - [`trading`]: 거래 내역 패널
//! - [`account_logs`]: 잔고/손익/낙폭/통계 패널
//! - [`dashboard`]: 세션 확인 후 계좌 스냅샷에서 대시보드 뷰 생성

pub mod account_logs;
pub mod charts;
pub mod dashboard;
pub mod trading;

use prophub_core::{CoercionPlan, Collection, Table};
use serde::Serialize;
use tracing::debug;

pub use charts::{ChartSpec, NamedSeries, Notice, NoticeLevel, Panel};
pub use dashboard::{build_dashboard, DashboardView};

/// 데이터가 없을 때의 경고 메시지.
pub const NO_DATA_MESSAGE: &str = "No data found for this collection.";

/// 한 컬렉션의 뷰.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionView {
    pub collection: Collection,
    /// 컬렉션 표시 이름
    pub title: String,
    /// `Total rows` 지표
    pub total_rows: usize,
    /// 원본 행
    pub rows: Table,
    pub panels: Vec<Panel>,
    pub notices: Vec<Notice>,
}

impl CollectionView {
    fn empty(collection: Collection) -> Self {
        Self {
            collection,
            title: collection.title().to_string(),
            total_rows: 0,
            rows: Table::new(),
            panels: Vec::new(),
            notices: Vec::new(),
        }
    }
}

/// 원본 테이블에서 컬렉션 뷰를 만듭니다.
///
/// 빈 테이블은 패널 없이 "데이터 없음" 경고만 담습니다.
pub fn present(collection: Collection, raw: &Table) -> CollectionView {
    let mut view = CollectionView::empty(collection);

    if raw.is_empty() {
        view.notices.push(Notice::warning(NO_DATA_MESSAGE));
        return view;
    }

    let coerced = CoercionPlan::for_collection(collection, raw).apply(raw);

    view.panels = match collection {
        Collection::TradingHistory => trading::trading_panels(&coerced),
        Collection::Balance | Collection::Pnl => {
            account_logs::frequency_panel(&coerced).into_iter().collect()
        }
        Collection::DrawdownTracking => account_logs::frequency_panel(&coerced)
            .into_iter()
            .chain(std::iter::once(account_logs::drawdown_panel(&coerced)))
            .collect(),
        Collection::Estatistica => vec![account_logs::statistics_panel(&coerced)],
        Collection::AccountInfo => Vec::new(),
    };
    view.panels.retain(|p| !p.is_empty());
    view.total_rows = raw.len();
    view.rows = raw.clone();

    debug!(
        collection = collection.slug(),
        rows = view.total_rows,
        panels = view.panels.len(),
        "Collection view built"
    );

    view
}
