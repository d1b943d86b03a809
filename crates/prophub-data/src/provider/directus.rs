//! Directus REST API 클라이언트.
//!
//! 컬렉션별 엔드포인트에 `GET` 요청을 보내고 `{"data": [...]}` 본문을 테이블로 변환합니다.
//!
//! # 요청 형식
//!
//! ```text
//! GET <endpoint>?filter[<field>][_eq]=<account>&limit=<limit>
//! Authorization: Bearer <token>
//! ```
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use prophub_core::{AppConfig, Collection};
//! use prophub_data::{CollectionSource, DirectusClient};
//!
//! let config = AppConfig::load_default()?;
//! let client = DirectusClient::from_config(&config.directus)?;
//!
//! let trades = client.fetch(Collection::TradingHistory, "1919349374881500200").await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use prophub_core::{Collection, DirectusConfig, EndpointsConfig, Table};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use super::CollectionSource;
use crate::error::{DataError, Result};

/// Directus REST API 클라이언트.
pub struct DirectusClient {
    client: Client,
    bearer_token: SecretString,
    endpoints: EndpointsConfig,
}

impl DirectusClient {
    /// 새 클라이언트 생성.
    pub fn new(
        bearer_token: SecretString,
        endpoints: EndpointsConfig,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Config(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            bearer_token,
            endpoints,
        })
    }

    /// 설정에서 클라이언트 생성.
    pub fn from_config(config: &DirectusConfig) -> Result<Self> {
        Self::new(
            SecretString::from(config.bearer_token.expose_secret().to_string()),
            config.endpoints.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// 컬렉션 조회 쿼리 파라미터.
    fn query_params(collection: Collection, account: &str) -> [(String, String); 2] {
        [
            (
                format!("filter[{}][_eq]", collection.account_filter_field()),
                account.to_string(),
            ),
            ("limit".to_string(), collection.fetch_limit().to_string()),
        ]
    }
}

/// 응답 본문의 `data` 필드를 테이블로 변환합니다.
///
/// `data`가 없거나 null이면 빈 테이블, 단일 객체면 한 행짜리 테이블입니다.
fn decode_body(body: Value) -> Result<Table> {
    let Value::Object(mut map) = body else {
        return Err(DataError::Decode("응답 본문이 JSON 객체가 아닙니다".to_string()));
    };

    match map.remove("data") {
        None | Some(Value::Null) => Ok(Table::new()),
        Some(Value::Array(rows)) => Ok(Table::from_json_rows(rows)),
        Some(Value::Object(row)) => {
            let mut table = Table::new();
            table.push_json(row);
            Ok(table)
        }
        Some(other) => Err(DataError::Decode(format!(
            "예상하지 못한 data 형식: {}",
            other
        ))),
    }
}

#[async_trait]
impl CollectionSource for DirectusClient {
    fn name(&self) -> &str {
        "directus"
    }

    async fn fetch(&self, collection: Collection, account: &str) -> Result<Table> {
        let url = self.endpoints.url_for(collection);

        debug!(
            collection = collection.slug(),
            account = account,
            url = %url,
            "Directus 요청"
        );

        let response = self
            .client
            .get(url)
            .query(&Self::query_params(collection, account))
            .bearer_auth(self.bearer_token.expose_secret())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: Value = response.json().await?;
        let table = decode_body(body)?;

        debug!(
            collection = collection.slug(),
            rows = table.len(),
            "Directus 조회 완료"
        );

        Ok(table)
    }
}
