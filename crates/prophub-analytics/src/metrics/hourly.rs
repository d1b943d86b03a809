//! 시간대별 집계.

use std::collections::BTreeMap;

use chrono::Timelike;
use prophub_core::{parse_float, parse_timestamp, Cell, Table};
use serde::Serialize;

/// 시간대별 거래 수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourCount {
    /// 시 (0-23, 타임스탬프 자체 오프셋 기준)
    pub hour: u32,
    pub count: usize,
}

/// 시간대별 평균값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourMean {
    pub hour: u32,
    pub mean: f64,
}

/// 셀의 시(hour). 타임스탬프가 아니면 `None`.
pub fn hour_of(cell: &Cell) -> Option<u32> {
    parse_timestamp(cell).map(|ts| ts.hour())
}

/// 관측된 시간대별 행 수 (시간 오름차순).
pub fn hourly_counts(table: &Table, time_column: &str) -> Vec<HourCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for hour in table.column(time_column).filter_map(hour_of) {
        *counts.entry(hour).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(hour, count)| HourCount { hour, count })
        .collect()
}

/// 시간대별 평균 (시간 오름차순).
///
/// 값이 null인 행은 제외하며, 값이 하나도 없는 시간대는 결과에 없습니다.
pub fn hourly_mean(table: &Table, time_column: &str, value_column: &str) -> Vec<HourMean> {
    let mut sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for (time, value) in table.column(time_column).zip(table.column(value_column)) {
        if let (Some(hour), Some(value)) = (hour_of(time), parse_float(value)) {
            let entry = sums.entry(hour).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(hour, (sum, n))| HourMean {
            hour,
            mean: sum / n as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trades() -> Table {
        Table::from_json(json!([
            {"Opentime": "2024-01-01T09:15:00Z", "PnL_points": 10.0},
            {"Opentime": "2024-01-01T09:45:00Z", "PnL_points": -4.0},
            {"Opentime": "2024-01-01T14:00:00-03:00", "PnL_points": null},
            {"Opentime": null, "PnL_points": 3.0},
            {"Opentime": "garbage", "PnL_points": 1.0},
        ]))
    }

    #[test]
    fn test_hourly_counts_use_own_offset() {
        let counts = hourly_counts(&trades(), "Opentime");
        assert_eq!(
            counts,
            vec![
                HourCount { hour: 9, count: 2 },
                HourCount { hour: 14, count: 1 },
            ]
        );
    }

    #[test]
    fn test_hourly_mean_omits_hours_without_values() {
        let means = hourly_mean(&trades(), "Opentime", "PnL_points");
        assert_eq!(means, vec![HourMean { hour: 9, mean: 3.0 }]);
    }

    #[test]
    fn test_missing_column_is_empty() {
        assert!(hourly_counts(&trades(), "Closetime").is_empty());
        assert!(hourly_mean(&Table::new(), "Opentime", "PnL_points").is_empty());
    }
}
