use serde::Deserialize;
use utoipa::ToSchema;

/// 토큰 갱신/로그아웃 요청 DTO
///
/// 필드가 없거나 빈 문자열이면 토큰이 없는 것으로 간주합니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[serde(rename = "requestToken", default)]
    pub request_token: Option<String>,
}

impl TokenRequest {
    pub fn token(&self) -> Option<&str> {
        self.request_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
