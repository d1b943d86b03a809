//! 낙폭 추적 시계열.

use chrono::{DateTime, FixedOffset};
use prophub_core::{columns, parse_float, parse_timestamp, Table};
use serde::Serialize;

/// 낙폭 추적 시계열 (모든 시계열의 길이가 같음).
///
/// `date_created` 오름차순 안정 정렬, 날짜가 없는 행은 맨 뒤입니다.
/// 컬럼이 없으면 같은 길이의 null 시계열이 됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawdownSeries {
    pub timestamps: Vec<Option<DateTime<FixedOffset>>>,
    pub dd_max: Vec<Option<f64>>,
    pub hwm: Vec<Option<f64>>,
    pub saldo_atual: Vec<Option<f64>>,
    pub saldo_flt: Vec<Option<f64>>,
}

impl DrawdownSeries {
    pub fn from_table(table: &Table) -> Self {
        let sorted = table.sorted_by_timestamp(columns::DATE_CREATED);
        let numeric = |name: &str| sorted.column(name).map(parse_float).collect::<Vec<_>>();

        Self {
            timestamps: sorted
                .column(columns::DATE_CREATED)
                .map(parse_timestamp)
                .collect(),
            dd_max: numeric(columns::DD_MAX),
            hwm: numeric(columns::HWM),
            saldo_atual: numeric(columns::SALDO_ATUAL),
            saldo_flt: numeric(columns::SALDO_FLT),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// (이름, 시계열) 쌍을 표시 순서대로 반환합니다.
    pub fn named_series(&self) -> [(&'static str, &[Option<f64>]); 4] {
        [
            ("Max Drawdown", self.dd_max.as_slice()),
            ("HWM", self.hwm.as_slice()),
            ("Current Balance", self.saldo_atual.as_slice()),
            ("Floating Balance", self.saldo_flt.as_slice()),
        ]
    }
}
