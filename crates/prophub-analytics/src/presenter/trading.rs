//! 거래 내역 패널.
//!
//! 각 분석은 필요한 컬럼이 모두 있을 때만 생성됩니다. 한 분석의 컬럼이 없어도
//! 나머지 분석에는 영향이 없습니다.

use prophub_core::{columns, Cell, Table};

use super::charts::{ChartSpec, Panel};
use crate::metrics::{
    asset_volume, crosstab, cumulative_pnl, group_mean, hourly_counts, hourly_mean,
    numeric_values, scatter_points, value_counts, with_pnl_points,
};

/// 히스토그램 구간 수 (Duration, Ticks).
pub const HISTOGRAM_BINS: usize = 20;

/// 변환된 거래 내역 테이블의 분석 패널.
pub fn trading_panels(table: &Table) -> Vec<Panel> {
    // 가격과 방향이 모두 있으면 손익 컬럼을 추가
    let trades = if table.has_columns(&[columns::OPEN_PRICE, columns::CLOSE_PRICE, columns::SIDE]) {
        with_pnl_points(table)
    } else {
        table.clone()
    };
    let has_pnl = trades.has_column(columns::PNL_POINTS);

    let panels = [
        asset_distribution(&trades),
        side_analysis(&trades),
        price_analysis(&trades),
        duration_analysis(&trades, has_pnl),
        volume_analysis(&trades),
        type_analysis(&trades, has_pnl),
        hour_analysis(&trades, has_pnl),
        ticks_analysis(&trades),
        account_status(&trades),
    ];

    panels
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect()
}

fn asset_distribution(trades: &Table) -> Option<Panel> {
    if !trades.has_column(columns::ASSET) {
        return None;
    }

    let mut panel = Panel::new("Trades by Asset");
    panel.push(ChartSpec::pie(
        "Distribution by Asset",
        &value_counts(trades, columns::ASSET),
    ));
    Some(panel)
}

fn side_analysis(trades: &Table) -> Option<Panel> {
    if !trades.has_column(columns::SIDE) {
        return None;
    }

    let mut panel = Panel::new("Trades by Side");
    panel.push(ChartSpec::count_bar(
        "Number of Trades by Side",
        "Side",
        &value_counts(trades, columns::SIDE),
    ));

    if trades.has_column(columns::ASSET) {
        panel.push(ChartSpec::crosstab_bar(
            "Side Distribution by Asset",
            "Asset",
            "Count",
            &crosstab(trades, columns::ASSET, columns::SIDE),
        ));
    }
    Some(panel)
}

fn price_analysis(trades: &Table) -> Option<Panel> {
    if !trades.has_columns(&[columns::OPEN_PRICE, columns::CLOSE_PRICE]) {
        return None;
    }

    let mut panel = Panel::new("Price Analysis");

    if trades.has_columns(&[columns::PNL_POINTS, columns::DATE_CREATED]) {
        let curve = cumulative_pnl(trades);
        panel.push(ChartSpec::Line {
            title: "Cumulative P&L over Time (points)".to_string(),
            x_label: "Date".to_string(),
            y_label: "Cumulative P&L".to_string(),
            x: curve
                .iter()
                .map(|p| p.timestamp.map(Cell::Timestamp).unwrap_or_default())
                .collect(),
            y: curve.iter().map(|p| p.cumulative).collect(),
        });
    }

    panel.push(ChartSpec::histogram(
        "Open Price Distribution",
        "Open Price",
        numeric_values(trades, columns::OPEN_PRICE),
        None,
    ));
    panel.push(ChartSpec::histogram(
        "Close Price Distribution",
        "Close Price",
        numeric_values(trades, columns::CLOSE_PRICE),
        None,
    ));
    Some(panel)
}

fn duration_analysis(trades: &Table, has_pnl: bool) -> Option<Panel> {
    if !trades.has_column(columns::DURATION) {
        return None;
    }

    let mut panel = Panel::new("Trade Duration");
    panel.push(ChartSpec::histogram(
        "Trade Duration Distribution",
        "Duration (s)",
        numeric_values(trades, columns::DURATION),
        Some(HISTOGRAM_BINS),
    ));

    if has_pnl {
        panel.push(ChartSpec::Scatter {
            title: "Duration vs Result".to_string(),
            x_label: "Duration (s)".to_string(),
            y_label: "Result (points)".to_string(),
            points: scatter_points(
                trades,
                columns::DURATION,
                columns::PNL_POINTS,
                Some(columns::SIDE),
            ),
        });
    }
    Some(panel)
}

fn volume_analysis(trades: &Table) -> Option<Panel> {
    if !trades.has_column(columns::LOTS) {
        return None;
    }

    let mut panel = Panel::new("Volume");
    panel.push(ChartSpec::histogram(
        "Trade Size Distribution",
        "Lots",
        numeric_values(trades, columns::LOTS),
        None,
    ));

    if trades.has_column(columns::ASSET) {
        panel.push(ChartSpec::group_bar(
            "Total Volume by Asset",
            "Asset",
            "Total Volume (lots)",
            &asset_volume(trades),
        ));
    }
    Some(panel)
}

fn type_analysis(trades: &Table, has_pnl: bool) -> Option<Panel> {
    if !trades.has_column(columns::TYPE) {
        return None;
    }

    let mut panel = Panel::new("Trades by Type");
    panel.push(ChartSpec::pie(
        "Distribution by Trade Type",
        &value_counts(trades, columns::TYPE),
    ));

    if has_pnl {
        panel.push(ChartSpec::group_bar(
            "Mean P&L by Trade Type",
            "Type",
            "Mean P&L (points)",
            &group_mean(trades, columns::TYPE, columns::PNL_POINTS),
        ));
    }
    Some(panel)
}

fn hour_analysis(trades: &Table, has_pnl: bool) -> Option<Panel> {
    if !trades.has_column(columns::OPEN_TIME) {
        return None;
    }

    let counts = hourly_counts(trades, columns::OPEN_TIME);
    let mut panel = Panel::new("Trading Hours");
    panel.push(ChartSpec::Bar {
        title: "Trades by Hour of Day".to_string(),
        x_label: "Hour".to_string(),
        y_label: "Count".to_string(),
        categories: counts.iter().map(|c| c.hour.to_string()).collect(),
        values: counts.iter().map(|c| c.count as f64).collect(),
    });

    if has_pnl {
        let means = hourly_mean(trades, columns::OPEN_TIME, columns::PNL_POINTS);
        panel.push(ChartSpec::Line {
            title: "Mean P&L by Hour of Day".to_string(),
            x_label: "Hour".to_string(),
            y_label: "Mean P&L (points)".to_string(),
            x: means.iter().map(|m| Cell::Number(f64::from(m.hour))).collect(),
            y: means.iter().map(|m| Some(m.mean)).collect(),
        });
    }
    Some(panel)
}

fn ticks_analysis(trades: &Table) -> Option<Panel> {
    if !trades.has_column(columns::TICKS) {
        return None;
    }

    let mut panel = Panel::new("Ticks");
    panel.push(ChartSpec::histogram(
        "Ticks Distribution",
        "Ticks",
        numeric_values(trades, columns::TICKS),
        Some(HISTOGRAM_BINS),
    ));

    if trades.has_column(columns::DURATION) {
        panel.push(ChartSpec::Scatter {
            title: "Duration vs Ticks".to_string(),
            x_label: "Duration (s)".to_string(),
            y_label: "Ticks".to_string(),
            points: scatter_points(trades, columns::DURATION, columns::TICKS, None),
        });
    }
    Some(panel)
}

fn account_status(trades: &Table) -> Option<Panel> {
    if !trades.has_column(columns::ACCOUNT_STATUS) {
        return None;
    }

    let mut panel = Panel::new("Account Status");
    panel.push(ChartSpec::pie(
        "Distribution by Account Status",
        &value_counts(trades, columns::ACCOUNT_STATUS),
    ));
    Some(panel)
}
