//! 설정 관리.
//!
//! 우선순위 (낮음 → 높음):
//! 1. 내장 기본값
//! 2. 기존 대시보드 환경변수 (`URL_TRADING_HISTORY`, `BEARER`, `SENHA` 등)
//! 3. 설정 파일 (TOML, 선택)
//! 4. `PROPHUB__` 접두사 환경변수 (예: `PROPHUB__SERVER__PORT=9000`)
//!
//! 엔드포인트 URL, 토큰, 비밀번호는 검증하지 않고 불투명한 문자열로 취급합니다.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::Collection;
use crate::error::{ProphubError, ProphubResult};

/// 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_PATH_ENV: &str = "PROPHUB_CONFIG";

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 세션 토큰 서명 키의 최소 길이 (HS256).
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// 기존 대시보드에서 사용하던 환경변수 → 설정 키 매핑.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("URL_TRADING_HISTORY", "directus.endpoints.trading_history"),
    ("URL_ENVIO_BALANCE", "directus.endpoints.balance"),
    ("URL_LOG_PNL", "directus.endpoints.pnl"),
    ("URL_ENVIO_DRAWDOWN_TRACKING", "directus.endpoints.drawdown_tracking"),
    ("URL_ENVIO_ESTATISTICA", "directus.endpoints.estatistica"),
    ("URL_COREOPS_ACCOUNTS", "directus.endpoints.coreops_accounts"),
    ("BEARER", "directus.bearer_token"),
    ("SENHA", "session.login_password"),
];

/// 애플리케이션 설정.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// Directus 데이터 소스 설정
    pub directus: DirectusConfig,
    /// 로그인 세션 설정
    pub session: SessionConfig,
    /// 대시보드 표시 설정
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// `host:port` 형식의 바인딩 주소.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Directus REST API 설정.
#[derive(Debug, Deserialize)]
pub struct DirectusConfig {
    /// Bearer 토큰
    pub bearer_token: SecretString,
    /// 컬렉션별 엔드포인트 URL
    pub endpoints: EndpointsConfig,
    /// HTTP 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// 컬렉션별 엔드포인트 URL.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointsConfig {
    pub trading_history: String,
    pub balance: String,
    pub pnl: String,
    pub drawdown_tracking: String,
    pub estatistica: String,
    pub coreops_accounts: String,
}

impl EndpointsConfig {
    /// 컬렉션에 해당하는 엔드포인트 URL을 반환합니다.
    pub fn url_for(&self, collection: Collection) -> &str {
        match collection {
            Collection::TradingHistory => &self.trading_history,
            Collection::Balance => &self.balance,
            Collection::Pnl => &self.pnl,
            Collection::DrawdownTracking => &self.drawdown_tracking,
            Collection::Estatistica => &self.estatistica,
            Collection::AccountInfo => &self.coreops_accounts,
        }
    }
}

/// 로그인 세션 설정.
#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    /// 대시보드 로그인 비밀번호
    pub login_password: SecretString,
    /// 세션 토큰 서명 키
    pub jwt_secret: SecretString,
    /// 세션 토큰 유효 시간 (분)
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
}

impl SessionConfig {
    /// 세션 설정을 검증합니다.
    ///
    /// 서명 키가 비어 있거나 짧으면 누구나 세션 토큰을 위조할 수 있으므로 거부합니다.
    pub fn validate(&self) -> ProphubResult<()> {
        let secret_len = self.jwt_secret.expose_secret().trim().len();
        if secret_len < MIN_JWT_SECRET_LEN {
            return Err(ProphubError::Config(format!(
                "session.jwt_secret must be at least {} characters (got {})",
                MIN_JWT_SECRET_LEN, secret_len
            )));
        }
        if self.token_ttl_minutes <= 0 {
            return Err(ProphubError::Config(
                "session.token_ttl_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// 대시보드 표시 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// 계좌 입력란의 기본값
    #[serde(default)]
    pub default_account: String,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_token_ttl() -> i64 {
    720
}

impl AppConfig {
    /// 설정 파일(선택)과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 건너뜁니다.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8501)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        // 기존 환경변수는 기본값으로만 사용
        for (var, key) in LEGACY_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(*key, value)?;
            }
        }

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.as_ref()).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("PROPHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// `PROPHUB_CONFIG`가 설정되어 있으면 해당 경로를 사용합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[server]
host = "0.0.0.0"
port = 9000

[directus]
bearer_token = "token-abc"
request_timeout_secs = 5

[directus.endpoints]
trading_history = "https://cms.example.com/items/Log__Trading_history"
balance = "https://cms.example.com/items/log_balance"
pnl = "https://cms.example.com/items/Log__Pnl"
drawdown_tracking = "https://cms.example.com/items/log__drawdown_tracking"
estatistica = "https://cms.example.com/items/log_estatistica"
coreops_accounts = "https://cms.example.com/items/coreops_accounts"

[session]
login_password = "s3nha"
jwt_secret = "jwt-secret"

[dashboard]
default_account = "1919349374881500200"
"#;

    fn write_sample() -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "prophub-config-{}-{}.toml",
            std::process::id(),
            line!()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = write_sample();
        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.directus.bearer_token.expose_secret(), "token-abc");
        assert_eq!(config.directus.request_timeout_secs, 5);
        assert_eq!(config.session.login_password.expose_secret(), "s3nha");
        assert_eq!(config.session.token_ttl_minutes, 720);
        assert_eq!(config.dashboard.default_account, "1919349374881500200");
        assert!(config
            .directus
            .endpoints
            .url_for(Collection::Pnl)
            .ends_with("Log__Pnl"));
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let path = write_sample();
        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        let debug = format!("{:?}", config.session);
        assert!(!debug.contains("s3nha"));
        assert!(!debug.contains("jwt-secret"));
    }

    fn session(jwt_secret: &str) -> SessionConfig {
        SessionConfig {
            login_password: SecretString::from("s3nha".to_string()),
            jwt_secret: SecretString::from(jwt_secret.to_string()),
            token_ttl_minutes: 60,
        }
    }

    #[test]
    fn test_blank_jwt_secret_rejected() {
        assert!(matches!(session("").validate(), Err(ProphubError::Config(_))));
        assert!(matches!(
            session("                                        ").validate(),
            Err(ProphubError::Config(_))
        ));
        assert!(session("jwt-secret").validate().is_err());
    }

    #[test]
    fn test_long_jwt_secret_accepted() {
        assert!(session("test-secret-key-for-jwt-testing-minimum-32-chars")
            .validate()
            .is_ok());

        let mut config = session("test-secret-key-for-jwt-testing-minimum-32-chars");
        config.token_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.bind_address(), "127.0.0.1:8501");
        assert_eq!(server.request_timeout_secs, 30);
    }
}
