//! 세션 인증.
//!
//! 비밀번호 로그인 성공 시 JWT 세션 토큰을 발급하고, 보호된 라우트에서
//! 토큰을 검증하여 인증된 세션을 복원합니다.
//!
//! # 구성 요소
//!
//! - [`Claims`]: 세션 토큰 페이로드
//! - [`SessionAuth`]: Axum 핸들러용 세션 추출기
//! - 토큰 발급/검증 함수

mod jwt;
mod middleware;

pub use jwt::{
    create_token, decode_token, issue_session_token, Claims, JwtError, TokenResponse,
    SESSION_SUBJECT,
};
pub use middleware::{SessionAuth, SessionAuthError};
