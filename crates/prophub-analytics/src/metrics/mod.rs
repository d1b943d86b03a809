//! 파생 지표.
//!
//! 모든 계산은 (변환된) 테이블을 받아 실패 없이 결과를 돌려줍니다.
//! 빈 테이블이나 컬럼이 없는 테이블은 빈 결과가 됩니다.
//!
//! - [`pnl`]: 포인트 손익, 누적 손익
//! - [`hourly`]: 시간대별 빈도와 평균
//! - [`grouping`]: 값 빈도, 교차표, 그룹별 합계/평균
//! - [`drawdown`]: 낙폭 추적 시계열
//! - [`statistics`]: 통계 지표 카드
//! - [`daily`]: 일별 빈도
//! - [`series`]: 히스토그램/산점도 입력

pub mod daily;
pub mod drawdown;
pub mod grouping;
pub mod hourly;
pub mod pnl;
pub mod series;
pub mod statistics;

pub use daily::{daily_counts, DailyCount};
pub use drawdown::DrawdownSeries;
pub use grouping::{
    asset_volume, crosstab, group_mean, sum_by, value_counts, CrossTab, GroupValue, ValueCount,
};
pub use hourly::{hour_of, hourly_counts, hourly_mean, HourCount, HourMean};
pub use pnl::{cumulative_pnl, pnl_points, signed_pnl, with_pnl_points, CumulativePoint};
pub use series::{numeric_values, scatter_points, ScatterPoint};
pub use statistics::{statistics_cards, StatCard};
