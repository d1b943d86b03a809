//! 계좌 스냅샷.
//!
//! 한 계좌의 모든 컬렉션을 순차 조회하여 하나의 스냅샷으로 묶습니다.
//! 컬렉션 하나의 조회 실패는 빈 테이블과 경고로 바뀌고 나머지 조회는 계속됩니다.

use std::collections::BTreeMap;

use prophub_core::{Collection, Table};
use serde::Serialize;
use tracing::{info, warn};

use crate::provider::CollectionSource;

/// 컬렉션 조회 경고.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchWarning {
    /// 실패한 컬렉션
    pub collection: Collection,
    /// 사용자에게 보여줄 메시지
    pub message: String,
}

/// 계좌 스냅샷 (컬렉션별 원본 테이블).
#[derive(Debug, Clone, Default)]
pub struct AccountSnapshot {
    /// 계좌 번호
    pub account: String,
    tables: BTreeMap<Collection, Table>,
    warnings: Vec<FetchWarning>,
}

impl AccountSnapshot {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..Default::default()
        }
    }

    /// 컬렉션 테이블 (조회하지 않았거나 실패했으면 빈 테이블).
    pub fn table(&self, collection: Collection) -> Table {
        self.tables.get(&collection).cloned().unwrap_or_default()
    }

    /// 컬렉션 테이블 참조.
    pub fn table_ref(&self, collection: Collection) -> Option<&Table> {
        self.tables.get(&collection)
    }

    pub fn insert(&mut self, collection: Collection, table: Table) {
        self.tables.insert(collection, table);
    }

    /// 조회 경고 목록.
    pub fn warnings(&self) -> &[FetchWarning] {
        &self.warnings
    }

    /// 특정 컬렉션의 경고.
    pub fn warnings_for(&self, collection: Collection) -> impl Iterator<Item = &FetchWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.collection == collection)
    }

    /// 계좌 정보 카드 (계좌 정보 컬렉션이 비어 있으면 `None`).
    pub fn account_info(&self) -> Option<AccountInfo> {
        self.table_ref(Collection::AccountInfo)
            .and_then(AccountInfo::from_table)
    }
}

/// 계좌의 모든 컬렉션을 순차 조회합니다.
///
/// 실패하지 않습니다. 실패한 컬렉션은 빈 테이블과 경고로 기록됩니다.
pub async fn fetch_snapshot(source: &dyn CollectionSource, account: &str) -> AccountSnapshot {
    let mut snapshot = AccountSnapshot::new(account);

    for collection in Collection::ALL {
        match source.fetch(collection, account).await {
            Ok(table) => {
                snapshot.insert(collection, table);
            }
            Err(e) => {
                warn!(
                    source = source.name(),
                    collection = collection.slug(),
                    account = account,
                    status = ?e.status(),
                    error = %e,
                    "Collection fetch failed"
                );
                snapshot.warnings.push(FetchWarning {
                    collection,
                    message: format!("Error loading {}: {}", collection.title(), e),
                });
                snapshot.insert(collection, Table::new());
            }
        }
    }

    info!(
        source = source.name(),
        account = account,
        warnings = snapshot.warnings.len(),
        "Account snapshot fetched"
    );

    snapshot
}

/// 상단 계좌 정보 카드.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub status: String,
    pub title: String,
    pub broker: String,
    pub trading_platform: String,
    pub initial_balance: String,
    pub current_balance: String,
}

impl AccountInfo {
    /// 값이 없는 필드에 쓰는 표시 문자열.
    pub const MISSING: &'static str = "-";

    /// 계좌 정보 테이블의 첫 행에서 카드 값을 읽습니다.
    pub fn from_table(table: &Table) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        let field = |name: &str| {
            table
                .get(0, name)
                .label()
                .unwrap_or_else(|| Self::MISSING.to_string())
        };

        Some(Self {
            status: field("status"),
            title: field("title"),
            broker: field("broker"),
            trading_platform: field("trading_platform"),
            initial_balance: field("initial_balance"),
            current_balance: field("current_balance"),
        })
    }
}
