//! 통계 지표 카드.

use prophub_core::{parse_float, Table};
use serde::Serialize;

/// 지표 카드 (필드 이름과 값).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: f64,
}

/// 첫 행의 숫자 변환 가능한 필드를 컬럼 순서대로 카드로 만듭니다.
///
/// 유한한 실수로 변환되지 않는 필드는 제외됩니다.
pub fn statistics_cards(table: &Table) -> Vec<StatCard> {
    let Some(row) = table.first_row() else {
        return Vec::new();
    };

    row.into_iter()
        .filter_map(|(label, cell)| {
            parse_float(cell)
                .filter(|v| v.is_finite())
                .map(|value| StatCard {
                    label: label.to_string(),
                    value,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_numeric_fields_become_cards() {
        let table = Table::from_json(json!([
            {"win_rate": "0.62", "trades": 40, "name": "acc", "profit_factor": 1.8, "broken": "inf", "active": true},
            {"win_rate": 0.1}
        ]));

        let cards = statistics_cards(&table);
        let labels: Vec<_> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["win_rate", "trades", "profit_factor", "active"]);
        assert_eq!(cards[0].value, 0.62);
        assert_eq!(cards[3].value, 1.0);
    }

    #[test]
    fn test_empty_table() {
        assert!(statistics_cards(&Table::new()).is_empty());
    }
}
