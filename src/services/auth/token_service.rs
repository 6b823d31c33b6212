//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 액세스 토큰의 검증을 담당합니다.
//!
//! 두 토큰 종류는 서로 다른 HMAC 비밀키로 서명됩니다. 한쪽 키가 노출되어도
//! 다른 종류의 토큰을 위조할 수 없습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult, ErrorContext};

/// 토큰 발급자 포트
///
/// 상태가 없으며 동시 호출에 안전해야 합니다.
pub trait TokenSigner: Send + Sync {
    /// 짧은 수명의 액세스 토큰을 발급합니다.
    fn issue_access_token(&self, user_id: &str) -> AppResult<String>;

    /// 긴 수명의 리프레시 토큰을 발급합니다. 별도의 비밀키로 서명됩니다.
    fn issue_refresh_token(&self, user_id: &str) -> AppResult<String>;

    /// 액세스 토큰의 서명과 만료를 검증하고 사용자 ID를 반환합니다.
    ///
    /// 실패는 모두 [`AppError::Unauthorized`]입니다.
    fn verify_access_token(&self, token: &str) -> AppResult<String>;
}

/// HS256 JWT 토큰 서비스
///
/// ```rust,ignore
/// let signer = JwtTokenService::from_config();
/// let access = signer.issue_access_token(&user.id)?;
/// let user_id = signer.verify_access_token(&access)?;
/// ```
pub struct JwtTokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        if access_secret == refresh_secret {
            log::warn!("JWT_SECRET과 JWT_REFRESH_SECRET이 같습니다. 서로 다른 값을 사용하세요");
        }

        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// 환경 변수 설정으로 서비스를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(
            &JwtConfig::secret(),
            &JwtConfig::refresh_secret(),
            JwtConfig::access_expiration(),
            JwtConfig::refresh_expiration(),
        )
    }

    fn sign(&self, key: &EncodingKey, user_id: &str, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AppError::InternalError(format!("토큰 만료 시각 계산 실패: ttl={}s", ttl.num_seconds()))
        })?;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, key).context("JWT 토큰 생성 실패")
    }
}

impl TokenSigner for JwtTokenService {
    fn issue_access_token(&self, user_id: &str) -> AppResult<String> {
        self.sign(&self.access_encoding, user_id, self.access_ttl)
    }

    fn issue_refresh_token(&self, user_id: &str) -> AppResult<String> {
        self.sign(&self.refresh_encoding, user_id, self.refresh_ttl)
    }

    fn verify_access_token(&self, token: &str) -> AppResult<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.access_decoding, &validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => log::debug!("만료된 액세스 토큰"),
                    other => log::debug!("액세스 토큰 검증 실패: {:?}", other),
                }
                AppError::Unauthorized("Token is not valid".to_string())
            })
    }
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
///
/// 스킴은 대소문자를 구분하지 않으며, 토큰이 비어 있으면 실패합니다.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty() && !token.contains(' ') {
        Some(token)
    } else {
        None
    }
}
