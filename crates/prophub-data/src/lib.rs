//! 계좌 데이터 수집.
//!
//! 이 crate는 다음을 제공합니다:
//! - 컬렉션 데이터 소스 trait (`CollectionSource`)
//! - Directus REST 클라이언트
//! - 계좌 스냅샷 조립 (컬렉션별 테이블 + 수집 경고)

pub mod error;
pub mod provider;
pub mod snapshot;

pub use error::{DataError, Result};
pub use provider::{CollectionSource, DirectusClient, StaticSource};
pub use snapshot::{fetch_snapshot, AccountInfo, AccountSnapshot, FetchWarning};
