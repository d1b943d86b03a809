//! 메모리 데이터 소스.

use std::collections::HashMap;

use async_trait::async_trait;
use prophub_core::{Collection, Table};

use super::CollectionSource;
use crate::error::{DataError, Result};

/// 미리 채운 테이블을 돌려주는 소스.
///
/// 계좌 번호는 무시합니다. 등록되지 않은 컬렉션은 빈 테이블, 실패로 표시된
/// 컬렉션은 HTTP 500 오류를 돌려줍니다.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    tables: HashMap<Collection, Table>,
    failing: Vec<Collection>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬렉션 테이블 등록.
    pub fn with_table(mut self, collection: Collection, table: Table) -> Self {
        self.tables.insert(collection, table);
        self
    }

    /// 조회 시 실패하도록 표시.
    pub fn with_failure(mut self, collection: Collection) -> Self {
        self.failing.push(collection);
        self
    }
}

#[async_trait]
impl CollectionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, collection: Collection, _account: &str) -> Result<Table> {
        if self.failing.contains(&collection) {
            return Err(DataError::HttpStatus {
                status: 500,
                url: format!("memory://{}", collection.slug()),
            });
        }
        Ok(self.tables.get(&collection).cloned().unwrap_or_default())
    }
}
