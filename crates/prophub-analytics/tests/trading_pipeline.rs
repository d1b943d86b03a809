//! 거래 내역 파이프라인 통합 테스트
//!
//! 원본 JSON → 변환 → 지표 → 패널까지 전체 흐름을 확인합니다.

use prophub_analytics::{
    asset_volume, cumulative_pnl, hourly_counts, pnl_points, present, with_pnl_points,
    ChartSpec,
};
use prophub_core::{CoercionPlan, Collection, Table};
use proptest::prelude::*;
use serde_json::json;

fn coerced(raw: &Table) -> Table {
    CoercionPlan::for_collection(Collection::TradingHistory, raw).apply(raw)
}

#[test]
fn test_end_to_end_buy_then_sell() {
    let raw = Table::from_json(json!([
        {"date_created": "2024-01-01T12:00:00Z", "Side": "BUY", "Openprice": "100", "Closeprice": "105"},
        {"date_created": "2024-01-02T12:00:00Z", "Side": "SELL", "Openprice": "105", "Closeprice": "100"},
    ]));
    let trades = coerced(&raw);

    assert_eq!(pnl_points(&trades), vec![Some(5.0), Some(5.0)]);

    let curve = cumulative_pnl(&with_pnl_points(&trades));
    let cumulative: Vec<_> = curve.iter().map(|p| p.cumulative).collect();
    assert_eq!(cumulative, vec![Some(5.0), Some(10.0)]);

    let view = present(Collection::TradingHistory, &raw);
    let price = view
        .panels
        .iter()
        .find(|p| p.heading == "Price Analysis")
        .unwrap();
    let ChartSpec::Line { y, .. } = &price.charts[0] else {
        panic!("expected cumulative P&L line");
    };
    assert_eq!(y, &vec![Some(5.0), Some(10.0)]);
}

#[test]
fn test_asset_volume_sorted_descending() {
    let raw = Table::from_json(json!([
        {"Asset": "A", "Lots": 5},
        {"Asset": "B", "Lots": 12},
    ]));

    let volume = asset_volume(&coerced(&raw));
    let assets: Vec<_> = volume.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(assets, vec!["B", "A"]);
}

#[test]
fn test_missing_asset_skips_only_asset_charts() {
    let raw = Table::from_json(json!([
        {"Opentime": "2024-01-01T09:30:00Z", "Lots": 1, "Side": "BUY"},
        {"Opentime": "2024-01-01T15:10:00Z", "Lots": 2, "Side": "SELL"},
    ]));

    let view = present(Collection::TradingHistory, &raw);
    let headings: Vec<_> = view.panels.iter().map(|p| p.heading.as_str()).collect();
    assert_eq!(headings, vec!["Trades by Side", "Volume", "Trading Hours"]);

    // 자산 컬럼이 없으므로 거래량 패널은 히스토그램만
    let volume = &view.panels[1];
    assert_eq!(volume.charts.len(), 1);
    // 교차표 없음
    assert_eq!(view.panels[0].charts.len(), 1);

    let hours = hourly_counts(&coerced(&raw), "Opentime");
    assert_eq!(hours.len(), 2);
}

#[test]
fn test_empty_table_everything_empty() {
    let empty = Table::new();
    assert!(pnl_points(&empty).is_empty());
    assert!(cumulative_pnl(&empty).is_empty());
    assert!(hourly_counts(&empty, "Opentime").is_empty());
    assert!(asset_volume(&empty).is_empty());

    let view = present(Collection::TradingHistory, &empty);
    assert!(view.panels.is_empty());
    assert_eq!(view.notices.len(), 1);
}

fn trade() -> impl Strategy<Value = serde_json::Value> {
    (
        prop_oneof![Just("BUY"), Just("SELL"), Just("HOLD")],
        0.0f64..1000.0,
        0.0f64..1000.0,
        prop::option::of(0i64..1_000_000),
        prop::option::of((0u32..24, 0u32..60)),
    )
        .prop_map(|(side, open, close, day_offset, open_time)| {
            json!({
                "Side": side,
                "Openprice": open,
                "Closeprice": close,
                "date_created": day_offset.map(|s| {
                    format!("2024-01-01T{:02}:{:02}:{:02}Z", (s / 3600) % 24, (s / 60) % 60, s % 60)
                }),
                "Opentime": open_time.map(|(h, m)| format!("2024-02-01T{:02}:{:02}:00Z", h, m)),
            })
        })
}

proptest! {
    #[test]
    fn cumulative_is_non_decreasing_for_gains(
        gains in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 0..30)
    ) {
        let rows: Vec<_> = gains
            .iter()
            .enumerate()
            .map(|(i, (open, gain))| json!({
                "date_created": format!("2024-01-{:02}T00:00:00Z", (i % 28) + 1),
                "Side": "BUY",
                "Openprice": open,
                "Closeprice": open + gain,
            }))
            .collect();
        let table = with_pnl_points(&coerced(&Table::from_json_rows(rows)));

        let curve = cumulative_pnl(&table);
        let values: Vec<f64> = curve.iter().filter_map(|p| p.cumulative).collect();
        prop_assert_eq!(values.len(), gains.len());
        prop_assert!(values.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn hour_buckets_stay_in_range(rows in prop::collection::vec(trade(), 0..40)) {
        let table = coerced(&Table::from_json_rows(rows.clone()));
        let counts = hourly_counts(&table, "Opentime");

        prop_assert!(counts.iter().all(|c| c.hour <= 23));
        let total: usize = counts.iter().map(|c| c.count).sum();
        let with_time = rows.iter().filter(|r| !r["Opentime"].is_null()).count();
        prop_assert_eq!(total, with_time);
    }

    #[test]
    fn pnl_sign_rule_holds(rows in prop::collection::vec(trade(), 1..40)) {
        let table = coerced(&Table::from_json_rows(rows.clone()));
        let pnl = pnl_points(&table);

        for (row, value) in rows.iter().zip(pnl) {
            let open = row["Openprice"].as_f64().unwrap();
            let close = row["Closeprice"].as_f64().unwrap();
            let expected = match row["Side"].as_str().unwrap() {
                "BUY" => close - open,
                "SELL" => open - close,
                _ => 0.0,
            };
            prop_assert_eq!(value, Some(expected));
        }
    }
}
