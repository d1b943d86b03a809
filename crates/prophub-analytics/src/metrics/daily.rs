//! 일별 빈도.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use prophub_core::{parse_timestamp, Table};
use serde::Serialize;

/// 날짜별 행 수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// 타임스탬프 컬럼의 날짜별 행 수 (날짜 오름차순).
///
/// 날짜는 타임스탬프 자체 오프셋 기준이며, null은 제외됩니다.
pub fn daily_counts(table: &Table, column: &str) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ts in table.column(column).filter_map(parse_timestamp) {
        *counts.entry(ts.date_naive()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_daily_counts() {
        let table = Table::from_json(json!([
            {"created_at": "2024-03-02 10:00:00"},
            {"created_at": "2024-03-01T23:30:00-03:00"},
            {"created_at": "2024-03-02"},
            {"created_at": null},
        ]));

        let counts = daily_counts(&table, "created_at");
        assert_eq!(
            counts,
            vec![
                DailyCount { date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), count: 1 },
                DailyCount { date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), count: 2 },
            ]
        );
    }
}
