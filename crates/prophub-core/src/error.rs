//! 대시보드의 에러 타입.
//!
//! 데이터 변환과 지표 계산은 실패하지 않으므로 (잘못된 값은 null로 변환),
//! 여기에는 설정, 인증, 입력 검증 에러만 정의됩니다.

use thiserror::Error;

/// 핵심 대시보드 에러.
#[derive(Debug, Error)]
pub enum ProphubError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 인증 에러
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

/// 대시보드 작업을 위한 Result 타입.
pub type ProphubResult<T> = Result<T, ProphubError>;

impl ProphubError {
    /// 사용자에게 경고로 보여줄 에러인지 확인합니다.
    ///
    /// 인증 실패와 잘못된 입력은 화면에 경고로 표시되고,
    /// 나머지는 운영자 로그로만 남깁니다.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ProphubError::Auth(_) | ProphubError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_facing() {
        let auth_err = ProphubError::Auth("invalid password".to_string());
        assert!(auth_err.is_user_facing());

        let config_err = ProphubError::Config("missing endpoint".to_string());
        assert!(!config_err.is_user_facing());
    }

    #[test]
    fn test_error_display() {
        let err = ProphubError::InvalidInput("unknown collection: foo".to_string());
        assert_eq!(err.to_string(), "잘못된 입력: unknown collection: foo");
    }
}
