//! 세션 토큰 처리.
//!
//! 로그인 성공 시 발급하는 HS256 JWT의 생성/검증 로직.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// 대시보드 세션 토큰의 subject.
pub const SESSION_SUBJECT: &str = "dashboard";

/// 세션 토큰 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 항상 [`SESSION_SUBJECT`]
    pub sub: String,
    /// Issued At (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// JWT ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// 새 세션 Claims 생성.
    ///
    /// # Arguments
    ///
    /// * `expires_in_minutes` - 만료 시간 (분)
    pub fn new(expires_in_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: SESSION_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(expires_in_minutes)).timestamp(),
            jti: Some(uuid::Uuid::new_v4().to_string()),
        }
    }
}

/// 로그인 응답 토큰.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

/// JWT 토큰 에러.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("토큰 디코딩 실패")]
    DecodingError,
    #[error("토큰이 만료되었습니다")]
    TokenExpired,
    #[error("잘못된 토큰 형식")]
    InvalidToken,
}

/// 토큰 생성.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(JwtError::from)
}

/// 세션 토큰 발급.
pub fn issue_session_token(secret: &str, expires_in_minutes: i64) -> Result<TokenResponse, JwtError> {
    let claims = Claims::new(expires_in_minutes);
    Ok(TokenResponse {
        access_token: create_token(&claims, secret)?,
        token_type: "Bearer".to_string(),
        expires_in: expires_in_minutes * 60,
    })
}

/// 토큰 디코딩 및 검증.
///
/// 서명, 만료, subject를 검증합니다.
pub fn decode_token(token: &str, secret: &str) -> Result<TokenData<Claims>, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.sub = Some(SESSION_SUBJECT.to_string());

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidToken => JwtError::InvalidToken,
        _ => JwtError::DecodingError,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-jwt-testing-minimum-32-chars";

    #[test]
    fn test_issue_and_decode_token() {
        let token = issue_session_token(TEST_SECRET, 60).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);

        let decoded = decode_token(&token.access_token, TEST_SECRET).unwrap();
        assert_eq!(decoded.claims.sub, SESSION_SUBJECT);
        assert!(decoded.claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(&Claims::new(60), TEST_SECRET).unwrap();
        assert!(decode_token(&token, "another-secret-key-for-jwt-testing-32").is_err());
    }

    #[test]
    fn test_expired_token() {
        // 기본 leeway(60초)보다 오래 지난 토큰
        let mut claims = Claims::new(60);
        claims.exp = Utc::now().timestamp() - 3600;
        let token = create_token(&claims, TEST_SECRET).unwrap();

        assert!(matches!(
            decode_token(&token, TEST_SECRET),
            Err(JwtError::TokenExpired)
        ));
    }

    #[test]
    fn test_malformed_token() {
        assert!(matches!(
            decode_token("not-a-token", TEST_SECRET),
            Err(JwtError::InvalidToken)
        ));
    }
}
