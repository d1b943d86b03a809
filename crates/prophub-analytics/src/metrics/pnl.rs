//! 포인트 단위 손익.
//!
//! 거래 한 건의 손익은 방향(Side)에 따라 부호가 정해집니다:
//! - `BUY`: 청산가 - 진입가
//! - `SELL`: 진입가 - 청산가
//! - 그 외: 0
//!
//! 가격이 없으면 (BUY/SELL인 경우) 손익도 null이며 집계에서 제외됩니다.

use chrono::{DateTime, FixedOffset};
use prophub_core::{columns, parse_float, parse_timestamp, Cell, Table};
use serde::Serialize;

/// 매수 방향 표기.
pub const SIDE_BUY: &str = "BUY";
/// 매도 방향 표기.
pub const SIDE_SELL: &str = "SELL";

/// 거래 한 건의 부호 있는 손익 (포인트).
pub fn signed_pnl(side: Option<&str>, open: Option<f64>, close: Option<f64>) -> Option<f64> {
    match side {
        Some(SIDE_BUY) => Some(close? - open?),
        Some(SIDE_SELL) => Some(open? - close?),
        _ => Some(0.0),
    }
}

/// 행별 손익 (포인트).
pub fn pnl_points(table: &Table) -> Vec<Option<f64>> {
    (0..table.len())
        .map(|row| {
            signed_pnl(
                table.get(row, columns::SIDE).as_str(),
                parse_float(table.get(row, columns::OPEN_PRICE)),
                parse_float(table.get(row, columns::CLOSE_PRICE)),
            )
        })
        .collect()
}

/// `PnL_points` 컬럼을 추가한 복사본을 반환합니다.
pub fn with_pnl_points(table: &Table) -> Table {
    let values = pnl_points(table).into_iter().map(Cell::from_option).collect();
    let mut out = table.clone();
    out.set_column(columns::PNL_POINTS, values);
    out
}

/// 누적 손익 곡선의 한 점.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativePoint {
    /// 거래 생성 시각 (없으면 null, 곡선 끝에 위치)
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// 해당 거래의 손익
    pub pnl: Option<f64>,
    /// 누적 손익 (해당 거래 손익이 null이면 null)
    pub cumulative: Option<f64>,
}

/// 누적 손익 곡선.
///
/// `date_created` 기준 안정 정렬 (null은 맨 뒤) 후 `PnL_points`를 누적합니다.
/// `PnL_points` 컬럼이 없으면 가격과 방향에서 계산합니다.
pub fn cumulative_pnl(table: &Table) -> Vec<CumulativePoint> {
    let sorted = table.sorted_by_timestamp(columns::DATE_CREATED);
    let pnl: Vec<Option<f64>> = if sorted.has_column(columns::PNL_POINTS) {
        sorted.column(columns::PNL_POINTS).map(parse_float).collect()
    } else {
        pnl_points(&sorted)
    };

    let mut running = 0.0;
    sorted
        .column(columns::DATE_CREATED)
        .zip(pnl)
        .map(|(ts, pnl)| {
            let cumulative = pnl.map(|p| {
                running += p;
                running
            });
            CumulativePoint {
                timestamp: parse_timestamp(ts),
                pnl,
                cumulative,
            }
        })
        .collect()
}
