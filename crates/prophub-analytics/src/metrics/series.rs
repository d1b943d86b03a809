//! 히스토그램/산점도 입력.

use prophub_core::{parse_float, Table};
use serde::Serialize;

/// 산점도의 한 점.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// 색상 그룹 (예: Side)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// 숫자 컬럼의 null이 아닌 값 (행 순서).
pub fn numeric_values(table: &Table, column: &str) -> Vec<f64> {
    table.column(column).filter_map(parse_float).collect()
}

/// 산점도 점. x 또는 y가 null인 행은 건너뜁니다.
pub fn scatter_points(
    table: &Table,
    x_column: &str,
    y_column: &str,
    group_column: Option<&str>,
) -> Vec<ScatterPoint> {
    (0..table.len())
        .filter_map(|row| {
            Some(ScatterPoint {
                x: parse_float(table.get(row, x_column))?,
                y: parse_float(table.get(row, y_column))?,
                group: group_column.and_then(|g| table.get(row, g).label()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scatter_skips_incomplete_rows() {
        let table = Table::from_json(json!([
            {"Duration": 30, "PnL_points": 5, "Side": "BUY"},
            {"Duration": null, "PnL_points": 1, "Side": "SELL"},
            {"Duration": 12, "PnL_points": -3},
        ]));

        let points = scatter_points(&table, "Duration", "PnL_points", Some("Side"));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].group.as_deref(), Some("BUY"));
        assert_eq!(points[1].group, None);
        assert_eq!(numeric_values(&table, "Duration"), vec![30.0, 12.0]);
    }
}
