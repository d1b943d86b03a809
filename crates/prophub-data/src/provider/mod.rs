//! 컬렉션 데이터 소스.
//!
//! ## Directus
//! - `DirectusClient`: Directus REST API 클라이언트 (Bearer 토큰 필요)
//! - 컬렉션마다 계좌 번호 equality 필터와 조회 한도를 적용
//!
//! ## 메모리 소스
//! - `StaticSource`: 미리 채운 테이블을 그대로 돌려주는 소스 (테스트, 데모용)

pub mod directus;
pub mod memory;

use async_trait::async_trait;
use prophub_core::{Collection, Table};

use crate::error::Result;

pub use directus::DirectusClient;
pub use memory::StaticSource;

/// 컬렉션 데이터 소스 trait.
///
/// 한 계좌의 한 컬렉션을 원본 테이블로 가져옵니다. 필드 변환은 호출자 몫입니다.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// 소스 이름.
    fn name(&self) -> &str;

    /// 계좌의 컬렉션 레코드 조회.
    async fn fetch(&self, collection: Collection, account: &str) -> Result<Table>;
}
