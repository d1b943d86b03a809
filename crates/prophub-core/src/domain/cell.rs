//! 셀 값 타입과 실패 허용 파싱 함수.
//!
//! 원본 레코드는 JSON 값(문자열, 숫자, null 등)으로 들어옵니다.
//! 변환 실패는 에러가 아니라 `None`이며, null로 둘지 건너뛸지는 호출자가 정합니다.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// 타임존 없는 날짜/시간 문자열 형식 (UTC로 간주).
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// 공백 구분자를 쓰는 오프셋 포함 형식.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// 테이블의 단일 셀 값.
///
/// NaN 숫자는 저장하지 않습니다 (항상 `Null`로 정규화).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// 값 없음 / 변환 실패
    #[default]
    Null,
    /// 문자열
    Text(String),
    /// 숫자
    Number(f64),
    /// 불리언
    Bool(bool),
    /// 타임스탬프 (원본 오프셋 유지)
    Timestamp(DateTime<FixedOffset>),
}

impl Cell {
    /// 숫자 셀을 생성합니다. NaN은 `Null`이 됩니다.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Cell::Null
        } else {
            Cell::Number(value)
        }
    }

    /// 선택적 숫자에서 셀을 생성합니다.
    pub fn from_option(value: Option<f64>) -> Self {
        value.map(Cell::number).unwrap_or(Cell::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// 숫자 셀이면 값을 반환합니다 (문자열 파싱 없음).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 문자열 셀이면 값을 반환합니다.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 타임스탬프 셀이면 값을 반환합니다.
    pub fn as_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Cell::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// 그룹화 키로 쓸 문자열 표현.
    ///
    /// `Null`은 어떤 그룹에도 속하지 않으므로 `None`입니다.
    /// 정수 값은 소수점 없이 표시됩니다 (`5.0` → `"5"`).
    pub fn label(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Timestamp(ts) => Some(ts.to_rfc3339()),
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(b),
            Value::Number(n) => n.as_f64().map(Cell::number).unwrap_or(Cell::Null),
            Value::String(s) => Cell::Text(s),
            // 중첩 구조는 JSON 문자열로 보관
            other @ (Value::Array(_) | Value::Object(_)) => Cell::Text(other.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::number(value)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Cell::Number(_) => serializer.serialize_none(),
            Cell::Bool(b) => serializer.serialize_bool(*b),
            Cell::Timestamp(ts) => serializer.serialize_str(&ts.to_rfc3339()),
        }
    }
}

/// 셀을 실수로 변환합니다.
///
/// - 숫자: 그대로
/// - 문자열: 앞뒤 공백 제거 후 파싱 (`"NaN"`은 실패)
/// - 불리언: `1.0` / `0.0`
/// - 그 외: `None`
pub fn parse_float(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Cell::Null | Cell::Timestamp(_) => None,
    }
}

/// 셀을 타임스탬프로 변환합니다.
///
/// 문자열은 RFC 3339, 오프셋 포함 공백 구분 형식, 타임존 없는 날짜/시간,
/// 날짜만 있는 형식 순서로 시도합니다. 타임존 없는 값은 UTC로 간주합니다.
pub fn parse_timestamp(cell: &Cell) -> Option<DateTime<FixedOffset>> {
    match cell {
        Cell::Timestamp(ts) => Some(*ts),
        Cell::Text(s) => parse_timestamp_str(s),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts);
    }

    if let Some(ts) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(ts);
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive.and_utc().fixed_offset());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    #[test]
    fn test_cell_from_json() {
        assert_eq!(Cell::from(json!(null)), Cell::Null);
        assert_eq!(Cell::from(json!("BUY")), Cell::Text("BUY".to_string()));
        assert_eq!(Cell::from(json!(1.5)), Cell::Number(1.5));
        assert_eq!(Cell::from(json!(true)), Cell::Bool(true));
        assert_eq!(Cell::from(json!({"a": 1})), Cell::Text(r#"{"a":1}"#.to_string()));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float(&Cell::from(" 105.25 ")), Some(105.25));
        assert_eq!(parse_float(&Cell::Number(3.0)), Some(3.0));
        assert_eq!(parse_float(&Cell::Bool(true)), Some(1.0));
        assert_eq!(parse_float(&Cell::from("abc")), None);
        assert_eq!(parse_float(&Cell::from("NaN")), None);
        assert_eq!(parse_float(&Cell::from("")), None);
        assert_eq!(parse_float(&Cell::Null), None);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp(&Cell::from("2024-01-01T10:30:00.000Z")).unwrap();
        assert_eq!(rfc.hour(), 10);

        let offset = parse_timestamp(&Cell::from("2024-01-01T10:30:00-03:00")).unwrap();
        // 원본 오프셋 기준 시각 유지
        assert_eq!(offset.hour(), 10);

        let naive = parse_timestamp(&Cell::from("2024-01-01 23:05:00")).unwrap();
        assert_eq!(naive.hour(), 23);

        let date_only = parse_timestamp(&Cell::from("2024-01-02")).unwrap();
        assert_eq!(date_only.hour(), 0);

        assert!(parse_timestamp(&Cell::from("not a date")).is_none());
        assert!(parse_timestamp(&Cell::Number(1_700_000_000.0)).is_none());
    }

    #[test]
    fn test_label() {
        assert_eq!(Cell::Number(5.0).label(), Some("5".to_string()));
        assert_eq!(Cell::Number(0.5).label(), Some("0.5".to_string()));
        assert_eq!(Cell::from("EURUSD").label(), Some("EURUSD".to_string()));
        assert_eq!(Cell::Null.label(), None);
    }

    #[test]
    fn test_serialize_cell() {
        let cells = vec![Cell::Null, Cell::Number(2.5), Cell::from("x"), Cell::Number(f64::INFINITY)];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,2.5,"x",null]"#);
    }
}
