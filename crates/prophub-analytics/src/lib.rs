//! 계좌 분석 및 차트 구성.
//!
//! 이 crate는 다음을 제공합니다:
//! - 거래 손익, 시간대/자산별 집계, 낙폭 시계열, 통계 카드 ([`metrics`])
//! - 컬렉션별 패널 구성과 대시보드 뷰 ([`presenter`])

pub mod metrics;
pub mod presenter;

pub use metrics::*;
pub use presenter::{
    build_dashboard, present, ChartSpec, CollectionView, DashboardView, NamedSeries, Notice,
    NoticeLevel, Panel, NO_DATA_MESSAGE,
};
