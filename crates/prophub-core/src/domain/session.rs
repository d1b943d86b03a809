//! 세션 게이트.
//!
//! 세션은 `Unauthenticated`에서 시작하며, 제출한 비밀번호가 설정된 값과
//! 같을 때만 `Authenticated`로 전이합니다. 인증 상태는 세션이 끝날 때까지 유지됩니다.
//! 잠금, 요청 제한, 해싱은 하지 않습니다.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{ProphubError, ProphubResult};

/// 로그인 실패 시 사용자에게 보여줄 경고.
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password.";

/// 세션 인증 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// 초기 상태
    #[default]
    Unauthenticated,
    /// 인증됨 (세션 종료까지 유지)
    Authenticated,
}

/// 세션 범위 상태.
///
/// 전역 플래그 대신 파이프라인 진입점에 참조로 전달됩니다.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// 인증되지 않은 새 세션.
    pub fn new() -> Self {
        Self::default()
    }

    /// 서명 검증을 마친 세션 토큰에서 인증된 세션을 복원합니다.
    pub fn from_verified_token() -> Self {
        Self {
            state: SessionState::Authenticated,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// 인증되지 않은 세션이면 `Auth` 에러를 반환합니다.
    pub fn require_authenticated(&self) -> ProphubResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ProphubError::Auth("login required".to_string()))
        }
    }
}

/// 비밀번호 게이트.
#[derive(Debug)]
pub struct SessionGate {
    secret: SecretString,
}

impl SessionGate {
    /// 설정된 비밀번호로 게이트를 생성합니다.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// 비밀번호를 제출합니다.
    ///
    /// 일치하면 세션을 인증 상태로 바꿉니다. 불일치하면 상태는 그대로이고
    /// 사용자 경고 메시지를 담은 `Auth` 에러를 반환합니다.
    /// 이미 인증된 세션은 그대로 성공합니다.
    pub fn submit(&self, session: &mut Session, password: &str) -> ProphubResult<()> {
        if session.is_authenticated() {
            return Ok(());
        }

        if password == self.secret.expose_secret() {
            session.state = SessionState::Authenticated;
            tracing::info!("Dashboard login succeeded");
            Ok(())
        } else {
            tracing::warn!("Dashboard login rejected");
            Err(ProphubError::Auth(INVALID_PASSWORD_MESSAGE.to_string()))
        }
    }
}
