//! API 서비스 레이어.
//!
//! 라우트 핸들러에서 호출하는 조회 로직을 제공합니다.

pub mod dashboard;

pub use dashboard::load_dashboard;
