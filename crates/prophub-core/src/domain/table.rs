//! 레코드와 테이블.
//!
//! 테이블은 원본 순서(삽입 순서)를 유지하는 레코드 목록입니다.
//! 컬럼 목록은 모든 레코드 키의 합집합이며, 처음 등장한 순서를 따릅니다.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::cell::{parse_timestamp, Cell};

/// 컬렉션의 한 행 (필드 이름 → 셀).
pub type Record = BTreeMap<String, Cell>;

static NULL_CELL: Cell = Cell::Null;

/// 레코드 테이블.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// 빈 테이블을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 객체 목록에서 테이블을 생성합니다.
    ///
    /// 객체가 아닌 항목은 무시합니다.
    pub fn from_json_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut table = Self::new();
        for row in rows {
            if let Value::Object(map) = row {
                table.push_json(map);
            }
        }
        table
    }

    /// JSON 배열 값에서 테이블을 생성합니다. 배열이 아니면 빈 테이블입니다.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(rows) => Self::from_json_rows(rows),
            _ => Self::new(),
        }
    }

    /// JSON 객체 하나를 행으로 추가합니다.
    pub fn push_json(&mut self, map: Map<String, Value>) {
        self.push(map.into_iter().map(|(k, v)| (k, Cell::from(v))));
    }

    /// 행을 추가합니다. 새 필드는 컬럼 목록 끝에 추가됩니다.
    pub fn push<I, K>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (K, Cell)>,
        K: Into<String>,
    {
        let mut record = Record::new();
        for (key, cell) in fields {
            let key = key.into();
            if !self.columns.contains(&key) {
                self.columns.push(key.clone());
            }
            record.insert(key, cell);
        }
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 컬럼 이름 (처음 등장 순서).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// 모든 컬럼이 존재하는지 확인합니다.
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.has_column(name))
    }

    /// 셀 값을 반환합니다. 행에 필드가 없으면 `Null`입니다.
    pub fn get(&self, row: usize, column: &str) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL_CELL)
    }

    /// 한 컬럼의 셀을 행 순서대로 반환합니다.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
        self.rows
            .iter()
            .map(move |r| r.get(name).unwrap_or(&NULL_CELL))
    }

    /// 컬럼 값을 행 단위로 변환합니다. 컬럼이 없으면 아무것도 하지 않습니다.
    pub fn map_column<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(&Cell) -> Cell,
    {
        if !self.has_column(name) {
            return;
        }
        for row in &mut self.rows {
            let current = row.get(name).unwrap_or(&NULL_CELL);
            let next = f(current);
            row.insert(name.to_string(), next);
        }
    }

    /// 컬럼을 추가하거나 교체합니다.
    ///
    /// `values`가 행 수보다 짧으면 나머지 행은 `Null`이 됩니다.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.insert(name.to_string(), values.next().unwrap_or_default());
        }
    }

    /// 타임스탬프 컬럼 기준 오름차순으로 정렬된 복사본을 반환합니다.
    ///
    /// 안정 정렬이며 (동일 값은 원래 순서 유지), 타임스탬프가 null이거나
    /// 파싱할 수 없는 행은 맨 뒤로 갑니다.
    pub fn sorted_by_timestamp(&self, column: &str) -> Table {
        let mut keyed: Vec<(Option<DateTime<FixedOffset>>, &Record)> = self
            .rows
            .iter()
            .map(|r| (r.get(column).and_then(parse_timestamp), r))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        Table {
            columns: self.columns.clone(),
            rows: keyed.into_iter().map(|(_, r)| r.clone()).collect(),
        }
    }

    /// 첫 번째 행을 (컬럼 순서대로) 반환합니다.
    pub fn first_row(&self) -> Option<Vec<(&str, &Cell)>> {
        let row = self.rows.first()?;
        Some(
            self.columns
                .iter()
                .filter_map(|c| row.get(c).map(|cell| (c.as_str(), cell)))
                .collect(),
        )
    }
}

/// 행을 컬럼 순서대로 직렬화하기 위한 보조 타입.
struct OrderedRow<'a> {
    columns: &'a [String],
    record: &'a Record,
}

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            map.serialize_entry(column, self.record.get(column).unwrap_or(&NULL_CELL))?;
        }
        map.end()
    }
}

/// 객체 배열로 직렬화합니다 (누락 필드는 null).
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for record in &self.rows {
            seq.serialize_element(&OrderedRow {
                columns: &self.columns,
                record,
            })?;
        }
        seq.end()
    }
}
