//! # Google ID 토큰 검증 서비스
//!
//! 프론트엔드가 Google Identity Services로 받은 ID 토큰을 검증하고
//! 로컬 계정 연결에 쓰일 [`FederatedIdentity`]로 변환합니다.
//!
//! ## 검증 플로우
//!
//! ```text
//! ┌─────────────┐              ┌─────────────────┐              ┌─────────────────┐
//! │  클라이언트  │              │    우리 서버     │              │  Google JWKS    │
//! └─────────────┘              └─────────────────┘              └─────────────────┘
//!        │ 1. POST /api/auth/google      │                                │
//!        │    {"token": "<id token>"}    │                                │
//!        ├──────────────────────────────►│                                │
//!        │                               │ 2. 헤더에서 kid 추출            │
//!        │                               │ 3. 서명 키 조회 (캐시 1시간)     │
//!        │                               ├───────────────────────────────►│
//!        │                               │◄───────────────────────────────┤
//!        │                               │ 4. RS256 서명, aud, iss, exp 검증│
//!        │                               │ 5. email / email_verified 확인  │
//!        │ 6. 토큰 쌍 + 사용자 정보       │                                │
//!        │◄──────────────────────────────┤                                │
//! ```
//!
//! ## 계정 연동 정책
//!
//! 이메일이 연결 키입니다. 같은 이메일의 로컬 계정이 있으면 그 계정으로 로그인하고,
//! 없으면 임의 비밀번호 해시를 가진 새 계정을 만듭니다 ([`AuthService`](super::AuthService) 참고).

use std::sync::RwLock;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use crate::config::GoogleOAuthConfig;
use crate::domain::models::oauth::{FederatedIdentity, GoogleIdTokenClaims};
use crate::errors::{AppError, AppResult};

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];
const JWKS_CACHE_TTL: Duration = Duration::from_secs(3600);

/// 외부 신원 검증 포트
///
/// 검증 실패는 모두 [`AppError::FederationFailed`]로 보고됩니다.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> AppResult<FederatedIdentity>;
}

/// Google ID 토큰 검증기
pub struct GoogleIdTokenVerifier {
    client: reqwest::Client,
    client_id: Option<String>,
    certs_uri: String,
    keys: RwLock<Option<(JwkSet, Instant)>>,
}

impl GoogleIdTokenVerifier {
    pub fn new(client_id: Option<String>, certs_uri: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id,
            certs_uri,
            keys: RwLock::new(None),
        }
    }

    pub fn from_config() -> Self {
        Self::new(GoogleOAuthConfig::client_id(), GoogleOAuthConfig::certs_uri())
    }

    fn cached_keys(&self) -> Option<JwkSet> {
        let guard = self.keys.read().ok()?;
        match guard.as_ref() {
            Some((keys, fetched_at)) if fetched_at.elapsed() < JWKS_CACHE_TTL => Some(keys.clone()),
            _ => None,
        }
    }

    async fn fetch_keys(&self) -> AppResult<JwkSet> {
        let keys = self.client
            .get(&self.certs_uri)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 서명 키 요청 실패: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::ExternalServiceError(format!("Google 서명 키 응답 에러: {}", e)))?
            .json::<JwkSet>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 서명 키 파싱 실패: {}", e)))?;

        if let Ok(mut guard) = self.keys.write() {
            *guard = Some((keys.clone(), Instant::now()));
        }

        log::debug!("Google 서명 키 {}개 갱신", keys.keys.len());
        Ok(keys)
    }

    /// `kid`에 해당하는 키를 찾습니다. 캐시에 없으면 키 교체로 보고 한 번 다시 받아옵니다.
    async fn decoding_key(&self, kid: &str) -> AppResult<DecodingKey> {
        let keys = match self.cached_keys() {
            Some(keys) if keys.find(kid).is_some() => keys,
            _ => self.fetch_keys().await?,
        };

        let jwk = keys
            .find(kid)
            .ok_or_else(|| AppError::FederationFailed(format!("알 수 없는 서명 키: {}", kid)))?;

        DecodingKey::from_jwk(jwk).map_err(|e| AppError::FederationFailed(e.to_string()))
    }

    async fn verify_inner(&self, id_token: &str) -> AppResult<FederatedIdentity> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or_else(|| AppError::FederationFailed("GOOGLE_CLIENT_ID가 설정되지 않았습니다".to_string()))?;

        let header = decode_header(id_token)
            .map_err(|e| AppError::FederationFailed(format!("ID 토큰 헤더 해석 실패: {}", e)))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::FederationFailed(format!("지원하지 않는 알고리즘: {:?}", header.alg)));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::FederationFailed("ID 토큰에 kid가 없습니다".to_string()))?;

        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[client_id]);
        validation.set_issuer(&GOOGLE_ISSUERS);

        let claims = decode::<GoogleIdTokenClaims>(id_token, &key, &validation)
            .map_err(|e| AppError::FederationFailed(format!("ID 토큰 검증 실패: {}", e)))?
            .claims;

        claims.into_identity().map_err(AppError::FederationFailed)
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdTokenVerifier {
    async fn verify(&self, id_token: &str) -> AppResult<FederatedIdentity> {
        self.verify_inner(id_token).await.map_err(|e| {
            log::warn!("Google ID 토큰 검증 실패: {}", e);
            match e {
                AppError::FederationFailed(detail) => AppError::FederationFailed(detail),
                other => AppError::FederationFailed(other.to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 네트워크에 닿기 전에 실패해야 하는 경우만 검사한다
    fn verifier(client_id: Option<&str>) -> GoogleIdTokenVerifier {
        GoogleIdTokenVerifier::new(
            client_id.map(str::to_string),
            "http://127.0.0.1:9/certs".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_garbage_token_fails_federation() {
        let result = verifier(Some("client-id")).verify("garbage").await;
        assert!(matches!(result, Err(AppError::FederationFailed(_))));
    }

    #[actix_web::test]
    async fn test_missing_client_id_fails_federation() {
        let result = verifier(None).verify("a.b.c").await;
        assert!(matches!(result, Err(AppError::FederationFailed(_))));
    }

    #[actix_web::test]
    async fn test_hs256_token_is_rejected_before_key_lookup() {
        use jsonwebtoken::{encode, EncodingKey, Header};

        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "1", "exp": 4_000_000_000u64 }),
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let result = verifier(Some("client-id")).verify(&token).await;
        assert!(matches!(result, Err(AppError::FederationFailed(_))));
    }
}
