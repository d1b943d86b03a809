//! 필드 타입 변환 (coercion).
//!
//! 지정한 필드의 값을 타임스탬프 또는 실수로 변환합니다.
//! 변환할 수 없는 값은 `Null`이 되고 행은 유지됩니다.
//! 테이블에 없는 필드는 무시합니다. 이미 변환된 테이블을 다시 변환해도 결과는 같습니다.

use serde::Serialize;

use super::cell::{parse_float, parse_timestamp, Cell};
use super::collection::{columns, Collection};
use super::table::Table;

/// 변환 대상 타입.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 타임스탬프 또는 null
    Timestamp,
    /// 실수 또는 null
    Float,
}

/// 셀 하나를 변환합니다.
pub fn coerce_cell(cell: &Cell, field_type: FieldType) -> Cell {
    match field_type {
        FieldType::Timestamp => parse_timestamp(cell).map(Cell::Timestamp).unwrap_or_default(),
        FieldType::Float => Cell::from_option(parse_float(cell)),
    }
}

/// 테이블의 지정 필드를 변환한 복사본을 반환합니다.
pub fn coerce(table: &Table, fields: &[(&str, FieldType)]) -> Table {
    let mut coerced = table.clone();
    coerce_in_place(&mut coerced, fields);
    coerced
}

/// 테이블의 지정 필드를 제자리에서 변환합니다.
pub fn coerce_in_place(table: &mut Table, fields: &[(&str, FieldType)]) {
    for (name, field_type) in fields {
        table.map_column(name, |cell| coerce_cell(cell, *field_type));
    }
}

/// 컬렉션별 변환 계획.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoercionPlan {
    fields: Vec<(&'static str, FieldType)>,
}

impl CoercionPlan {
    /// 컬렉션과 테이블 스키마에 맞는 변환 계획을 만듭니다.
    ///
    /// Balance/PnL은 날짜 후보 컬럼 중 처음 존재하는 하나만 변환합니다.
    pub fn for_collection(collection: Collection, table: &Table) -> Self {
        let mut fields = Vec::new();
        match collection {
            Collection::TradingHistory => {
                fields.extend(
                    columns::TRADING_DATE_COLUMNS
                        .iter()
                        .map(|c| (*c, FieldType::Timestamp)),
                );
                fields.extend(
                    columns::TRADING_NUMERIC_COLUMNS
                        .iter()
                        .map(|c| (*c, FieldType::Float)),
                );
            }
            Collection::DrawdownTracking => {
                fields.push((columns::DATE_CREATED, FieldType::Timestamp));
                fields.extend(
                    columns::DRAWDOWN_NUMERIC_COLUMNS
                        .iter()
                        .map(|c| (*c, FieldType::Float)),
                );
            }
            Collection::Balance | Collection::Pnl => {
                if let Some(date_column) = Self::frequency_date_column(table) {
                    fields.push((date_column, FieldType::Timestamp));
                }
            }
            Collection::Estatistica | Collection::AccountInfo => {}
        }
        Self { fields }
    }

    /// 일별 빈도 차트에 사용할 날짜 컬럼 (후보 중 처음 존재하는 것).
    pub fn frequency_date_column(table: &Table) -> Option<&'static str> {
        columns::FREQUENCY_DATE_CANDIDATES
            .iter()
            .copied()
            .find(|c| table.has_column(c))
    }

    pub fn fields(&self) -> &[(&'static str, FieldType)] {
        &self.fields
    }

    /// 계획을 적용한 복사본을 반환합니다.
    pub fn apply(&self, table: &Table) -> Table {
        coerce(table, &self.fields)
    }
}
