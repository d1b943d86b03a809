//! # PropHub Core
//!
//! 계좌 대시보드의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 대시보드 전반에서 사용되는 기본 타입을 제공합니다:
//! - 셀/레코드/테이블 구조체
//! - 컬렉션별 필드 타입 변환 (coercion)
//! - 컬렉션 정의 및 컬럼 이름
//! - 세션 게이트 (비밀번호 인증 상태)
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
