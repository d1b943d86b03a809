//! 애플리케이션 공유 상태.
//!
//! 모든 핸들러가 `Arc<AppState>`로 공유합니다. 상태는 생성 후 변경되지 않으며,
//! 로그인 세션은 서버가 아닌 토큰에 담깁니다.

use std::sync::Arc;

use prophub_core::{AppConfig, SessionGate, Table};
use prophub_data::{CollectionSource, DataError, DirectusClient, StaticSource};
use secrecy::{ExposeSecret, SecretString};

/// 애플리케이션 공유 상태.
pub struct AppState {
    /// 컬렉션 데이터 소스 (운영: Directus)
    pub source: Arc<dyn CollectionSource>,

    /// 비밀번호 게이트
    pub gate: SessionGate,

    /// 세션 토큰 서명 키
    jwt_secret: SecretString,

    /// 세션 토큰 유효 시간 (분)
    pub token_ttl_minutes: i64,

    /// 계좌 입력란 기본값
    pub default_account: String,

    /// 서버 시작 시간
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(
        source: Arc<dyn CollectionSource>,
        gate: SessionGate,
        jwt_secret: SecretString,
        token_ttl_minutes: i64,
    ) -> Self {
        Self {
            source,
            gate,
            jwt_secret,
            token_ttl_minutes,
            default_account: String::new(),
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 계좌 기본값 설정.
    pub fn with_default_account(mut self, account: impl Into<String>) -> Self {
        self.default_account = account.into();
        self
    }

    /// 설정에서 Directus 소스를 사용하는 상태를 생성합니다.
    ///
    /// 세션 설정이 유효하지 않으면 (예: 짧은 서명 키) 거부합니다.
    pub fn from_config(config: &AppConfig) -> Result<Self, DataError> {
        config
            .session
            .validate()
            .map_err(|e| DataError::Config(e.to_string()))?;

        let source = DirectusClient::from_config(&config.directus)?;
        let gate = SessionGate::new(copy_secret(&config.session.login_password));

        Ok(Self::new(
            Arc::new(source),
            gate,
            copy_secret(&config.session.jwt_secret),
            config.session.token_ttl_minutes,
        )
        .with_default_account(config.dashboard.default_account.clone()))
    }

    pub fn jwt_secret(&self) -> &str {
        self.jwt_secret.expose_secret()
    }

    /// 서버 업타임 (초).
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}

fn copy_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_string())
}

/// 테스트용 로그인 비밀번호.
pub const TEST_PASSWORD: &str = "s3nha";

/// 테스트용 JWT 비밀 키.
pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

/// 테스트용 AppState 생성.
///
/// 빈 메모리 소스와 [`TEST_PASSWORD`], [`TEST_JWT_SECRET`]을 사용합니다.
pub fn create_test_state() -> AppState {
    create_test_state_with_source(StaticSource::new())
}

/// 지정한 메모리 소스로 테스트용 AppState 생성.
pub fn create_test_state_with_source(source: StaticSource) -> AppState {
    AppState::new(
        Arc::new(source),
        SessionGate::new(SecretString::from(TEST_PASSWORD.to_string())),
        SecretString::from(TEST_JWT_SECRET.to_string()),
        60,
    )
    .with_default_account("1919349374881500200")
}

/// 거래 내역 두 건과 계좌 정보가 들어 있는 테스트 소스.
pub fn sample_source() -> StaticSource {
    let trades = Table::from_json(serde_json::json!([
        {"date_created": "2024-01-01T12:00:00Z", "Asset": "WIN", "Side": "BUY", "Openprice": "100", "Closeprice": "105"},
        {"date_created": "2024-01-02T12:00:00Z", "Asset": "WDO", "Side": "SELL", "Openprice": "105", "Closeprice": "100"},
    ]));
    let info = Table::from_json(serde_json::json!([
        {"status": "active", "title": "Challenge 50k", "broker": "Genial"}
    ]));

    StaticSource::new()
        .with_table(prophub_core::Collection::TradingHistory, trades)
        .with_table(prophub_core::Collection::AccountInfo, info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prophub_core::{
        DashboardConfig, DirectusConfig, EndpointsConfig, LoggingConfig, ServerConfig,
        SessionConfig,
    };

    fn config_with_jwt_secret(jwt_secret: &str) -> AppConfig {
        let url = |path: &str| format!("https://cms.example.com/items/{}", path);
        AppConfig {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            directus: DirectusConfig {
                bearer_token: SecretString::from("token-abc".to_string()),
                endpoints: EndpointsConfig {
                    trading_history: url("trading_history"),
                    balance: url("balance"),
                    pnl: url("pnl"),
                    drawdown_tracking: url("drawdown_tracking"),
                    estatistica: url("estatistica"),
                    coreops_accounts: url("coreops_accounts"),
                },
                request_timeout_secs: 5,
            },
            session: SessionConfig {
                login_password: SecretString::from(TEST_PASSWORD.to_string()),
                jwt_secret: SecretString::from(jwt_secret.to_string()),
                token_ttl_minutes: 60,
            },
            dashboard: DashboardConfig::default(),
        }
    }

    #[test]
    fn test_from_config_rejects_empty_jwt_secret() {
        let result = AppState::from_config(&config_with_jwt_secret(""));
        assert!(matches!(result, Err(DataError::Config(_))));
    }

    #[test]
    fn test_from_config_rejects_short_jwt_secret() {
        let result = AppState::from_config(&config_with_jwt_secret("jwt-secret"));
        assert!(matches!(result, Err(DataError::Config(_))));
    }

    #[test]
    fn test_from_config_builds_directus_state() {
        let state = AppState::from_config(&config_with_jwt_secret(TEST_JWT_SECRET)).unwrap();
        assert_eq!(state.source.name(), "directus");
        assert_eq!(state.jwt_secret(), TEST_JWT_SECRET);
        assert_eq!(state.token_ttl_minutes, 60);
    }
}
