//! JWT 인증 토큰 클레임 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 클라이언트에 전달되는 토큰 쌍을 정의합니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 사용자 ID 외의 정보는 담지 않습니다.
///
/// ## 클레임 구성
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (같은 초에 발급된 토큰도 서로 다른 문자열이 되도록 보장)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 클라이언트에게 전달되는 액세스/리프레시 토큰 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
