//! 범주형 집계.
//!
//! 값 빈도, 교차표, 그룹별 합계/평균을 계산합니다. null 키는 어느 그룹에도 속하지 않습니다.

use std::collections::{BTreeMap, BTreeSet};

use prophub_core::{columns, parse_float, Table};
use serde::Serialize;

/// 값 빈도.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// 그룹별 집계값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupValue {
    pub key: String,
    pub value: f64,
}

/// 교차표 (행 × 열 빈도).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    /// 행 라벨 (오름차순)
    pub rows: Vec<String>,
    /// 열 라벨 (오름차순)
    pub columns: Vec<String>,
    /// `counts[row][column]`
    pub counts: Vec<Vec<usize>>,
}

impl CrossTab {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 한 열의 값을 행 순서대로 반환합니다. 범위 밖의 열은 0입니다.
    pub fn column_values(&self, column: usize) -> Vec<usize> {
        self.counts
            .iter()
            .map(|row| row.get(column).copied().unwrap_or(0))
            .collect()
    }
}

/// 컬럼 값 빈도 (빈도 내림차순, 동률이면 값 오름차순).
pub fn value_counts(table: &Table, column: &str) -> Vec<ValueCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for label in table.column(column).filter_map(|c| c.label()) {
        *counts.entry(label).or_default() += 1;
    }

    let mut out: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // BTreeMap 순서(값 오름차순) 위에서 안정 정렬
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// 두 컬럼의 교차표.
///
/// 두 키가 모두 있는 행만 집계합니다.
pub fn crosstab(table: &Table, row_column: &str, column_column: &str) -> CrossTab {
    let pairs: Vec<(String, String)> = table
        .column(row_column)
        .zip(table.column(column_column))
        .filter_map(|(r, c)| Some((r.label()?, c.label()?)))
        .collect();

    let rows: Vec<String> = pairs
        .iter()
        .map(|(r, _)| r.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let cols: Vec<String> = pairs
        .iter()
        .map(|(_, c)| c.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = vec![vec![0usize; cols.len()]; rows.len()];
    for (r, c) in &pairs {
        if let (Ok(i), Ok(j)) = (rows.binary_search(r), cols.binary_search(c)) {
            counts[i][j] += 1;
        }
    }

    CrossTab {
        rows,
        columns: cols,
        counts,
    }
}

/// 그룹별 합계 (합계 내림차순, 동률이면 키 오름차순).
///
/// null 값은 0으로 더해지지 않고 건너뜁니다.
pub fn sum_by(table: &Table, key_column: &str, value_column: &str) -> Vec<GroupValue> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for (key, value) in table.column(key_column).zip(table.column(value_column)) {
        if let Some(key) = key.label() {
            *sums.entry(key).or_default() += parse_float(value).unwrap_or(0.0);
        }
    }

    let mut out: Vec<GroupValue> = sums
        .into_iter()
        .map(|(key, value)| GroupValue { key, value })
        .collect();
    out.sort_by(|a, b| b.value.total_cmp(&a.value));
    out
}

/// 자산별 거래량 (`Lots` 합계, 내림차순).
pub fn asset_volume(table: &Table) -> Vec<GroupValue> {
    sum_by(table, columns::ASSET, columns::LOTS)
}

/// 그룹별 평균 (키 오름차순).
///
/// null 값은 건너뛰며, 값이 하나도 없는 그룹은 결과에 없습니다.
pub fn group_mean(table: &Table, key_column: &str, value_column: &str) -> Vec<GroupValue> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (key, value) in table.column(key_column).zip(table.column(value_column)) {
        if let (Some(key), Some(value)) = (key.label(), parse_float(value)) {
            let entry = sums.entry(key).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(key, (sum, n))| GroupValue {
            key,
            value: sum / n as f64,
        })
        .collect()
}
