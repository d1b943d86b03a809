//! 잔고/손익/낙폭/통계 컬렉션 패널.

use prophub_core::{Cell, CoercionPlan, Table};

use super::charts::{ChartSpec, NamedSeries, Panel};
use crate::metrics::{daily_counts, statistics_cards, DrawdownSeries};

/// 일별 빈도 패널 (잔고, 손익, 낙폭 로그).
///
/// 날짜 후보 컬럼 중 처음 있는 컬럼을 사용하며, 후보가 없으면 `None`입니다.
pub fn frequency_panel(table: &Table) -> Option<Panel> {
    let column = CoercionPlan::frequency_date_column(table)?;
    let counts = daily_counts(table, column);

    let mut panel = Panel::new("Frequency by Date");
    panel.push(ChartSpec::Bar {
        title: format!("Rows per Day ({})", column),
        x_label: "Date".to_string(),
        y_label: "Frequency".to_string(),
        categories: counts.iter().map(|c| c.date.to_string()).collect(),
        values: counts.iter().map(|c| c.count as f64).collect(),
    });
    Some(panel)
}

/// 낙폭 추적 다중 선 차트 패널.
pub fn drawdown_panel(table: &Table) -> Panel {
    let series = DrawdownSeries::from_table(table);

    let mut panel = Panel::new("Drawdown Tracking");
    panel.push(ChartSpec::MultiLine {
        title: "Drawdown, HWM and Balance".to_string(),
        x_label: "Date".to_string(),
        x: series
            .timestamps
            .iter()
            .map(|ts| ts.map(Cell::Timestamp).unwrap_or_default())
            .collect(),
        series: series
            .named_series()
            .into_iter()
            .map(|(name, values)| NamedSeries {
                name: name.to_string(),
                values: values.to_vec(),
            })
            .collect(),
    });
    panel
}

/// 통계 지표 카드 패널.
pub fn statistics_panel(table: &Table) -> Panel {
    let mut panel = Panel::new("Statistical Indicators");
    for card in statistics_cards(table) {
        panel.push(ChartSpec::indicator(card.label, card.value));
    }
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_frequency_prefers_date_created() {
        let table = Table::from_json(json!([
            {"created_at": "2024-01-05", "date_created": "2024-01-01T08:00:00Z"},
            {"created_at": "2024-01-05", "date_created": "2024-01-01T09:00:00Z"},
        ]));

        let panel = frequency_panel(&table).unwrap();
        let ChartSpec::Bar { categories, values, .. } = &panel.charts[0] else {
            panic!("expected bar");
        };
        assert_eq!(categories, &vec!["2024-01-01".to_string()]);
        assert_eq!(values, &vec![2.0]);
    }

    #[test]
    fn test_frequency_without_date_column() {
        let table = Table::from_json(json!([{"balance": 10}]));
        assert!(frequency_panel(&table).is_none());
    }

    #[test]
    fn test_drawdown_panel_has_four_aligned_series() {
        let table = Table::from_json(json!([
            {"date_created": "2024-01-02T00:00:00Z", "dd_max": 2.0},
            {"date_created": "2024-01-01T00:00:00Z", "dd_max": 1.0, "hwm": 100.0},
        ]));

        let panel = drawdown_panel(&table);
        let ChartSpec::MultiLine { x, series, .. } = &panel.charts[0] else {
            panic!("expected multi line");
        };
        assert_eq!(x.len(), 2);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].values, vec![Some(1.0), Some(2.0)]);
        assert_eq!(series[1].values, vec![Some(100.0), None]);
    }
}
