//! 대시보드 도메인 모델.
//!
//! - [`cell`]: 셀 값 및 실패 허용 파싱 함수
//! - [`table`]: 레코드와 테이블
//! - [`coercion`]: 컬렉션별 필드 타입 변환
//! - [`collection`]: 컬렉션 정의와 컬럼 이름
//! - [`session`]: 비밀번호 세션 게이트

pub mod cell;
pub mod coercion;
pub mod collection;
pub mod session;
pub mod table;

pub use cell::{parse_float, parse_timestamp, Cell};
pub use coercion::{coerce, coerce_cell, coerce_in_place, CoercionPlan, FieldType};
pub use collection::{columns, Collection};
pub use session::{Session, SessionGate, SessionState, INVALID_PASSWORD_MESSAGE};
pub use table::{Record, Table};
