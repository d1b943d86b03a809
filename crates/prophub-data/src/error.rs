//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 수집 오류.
///
/// 스냅샷 조립 단계에서 모두 경고로 바뀌며, 다른 컬렉션 수집을 중단시키지 않습니다.
#[derive(Debug, Error)]
pub enum DataError {
    /// 2xx가 아닌 HTTP 응답
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// 네트워크/전송 오류
    #[error("Request error: {0}")]
    Transport(String),

    /// 응답 본문 파싱 오류
    #[error("Decode error: {0}")]
    Decode(String),

    /// 클라이언트 설정 오류
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DataError {
    /// HTTP 상태 코드 (상태 오류인 경우).
    pub fn status(&self) -> Option<u16> {
        match self {
            DataError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            DataError::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            DataError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
