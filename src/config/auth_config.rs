//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 비밀키, 토큰 수명, Google ID 토큰 검증 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="access-token-secret"
//! export JWT_REFRESH_SECRET="refresh-token-secret"   # JWT_SECRET과 달라야 합니다
//! export JWT_ACCESS_EXPIRATION="15m"
//! export JWT_REFRESH_EXPIRATION="7d"
//! ```
//!
//! ### Google 로그인 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="123456789-abc.apps.googleusercontent.com"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let signer = JwtTokenService::new(
//!     JwtConfig::secret(),
//!     JwtConfig::refresh_secret(),
//!     JwtConfig::access_expiration(),
//!     JwtConfig::refresh_expiration(),
//! );
//! ```

use std::env;
use chrono::Duration;

/// Google ID 토큰 검증 설정
///
/// 프론트엔드가 Google Identity Services로 받은 ID 토큰을 검증할 때 사용합니다.
/// 서버는 Authorization Code 교환을 하지 않으므로 Client Secret은 필요하지 않습니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// ID 토큰의 `aud` 클레임과 비교됩니다. 설정되지 않은 경우 `None`을 반환하며,
    /// 이때 Google 로그인은 모두 실패 처리됩니다.
    pub fn client_id() -> Option<String> {
        match env::var("GOOGLE_CLIENT_ID") {
            Ok(id) if !id.trim().is_empty() => Some(id),
            _ => {
                log::warn!("GOOGLE_CLIENT_ID가 설정되지 않았습니다. Google 로그인이 비활성화됩니다");
                None
            }
        }
    }

    /// Google ID 토큰 서명 키(JWKS) 엔드포인트를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://www.googleapis.com/oauth2/v3/certs`
    pub fn certs_uri() -> String {
        env::var("GOOGLE_CERTS_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/certs".to_string())
    }
}

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명됩니다.
/// 한쪽 키가 노출되어도 다른 종류의 토큰을 위조할 수 없어야 합니다.
///
/// ## 권장 설정값
///
/// - 액세스 토큰: 15분
/// - 리프레시 토큰: 7일 (저장소 레코드 만료와 동일)
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명 비밀키를 반환합니다.
    ///
    /// 환경 변수가 없으면 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "dev-access-token-secret".to_string()
            })
    }

    /// 리프레시 토큰 서명 비밀키를 반환합니다.
    pub fn refresh_secret() -> String {
        env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
                "dev-refresh-token-secret".to_string()
            })
    }

    /// 액세스 토큰 수명 (기본값 15분)
    pub fn access_expiration() -> Duration {
        duration_from_env("JWT_ACCESS_EXPIRATION", Duration::minutes(15))
    }

    /// 리프레시 토큰 JWT의 `exp` 수명 (기본값 7일)
    pub fn refresh_expiration() -> Duration {
        duration_from_env("JWT_REFRESH_EXPIRATION", Duration::days(7))
    }
}

/// 토큰 수명 상한 (일)
pub const MAX_TOKEN_LIFETIME_DAYS: i64 = 365;

fn duration_from_env(key: &str, default: Duration) -> Duration {
    match env::var(key) {
        Ok(raw) => parse_duration(&raw).unwrap_or_else(|| {
            log::warn!("{} 값 '{}'을 해석할 수 없습니다. 기본값 {}초 사용", key, raw, default.num_seconds());
            default
        }),
        Err(_) => default,
    }
}

/// `15m`, `7d`, `2h`, `30s`, `3600` 형식의 기간 문자열을 해석합니다.
///
/// 단위가 없으면 초로 간주합니다. 0 이하의 값과 [`MAX_TOKEN_LIFETIME_DAYS`]를
/// 넘는 값은 거부합니다.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let split_at = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split_at);

    let amount: i64 = digits.parse().ok()?;
    if amount <= 0 {
        return None;
    }

    let duration = match unit.trim() {
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        _ => None,
    }?;

    (duration <= Duration::days(MAX_TOKEN_LIFETIME_DAYS)).then_some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("15m"), Some(Duration::minutes(15)));
        assert_eq!(parse_duration("7d"), Some(Duration::days(7)));
        assert_eq!(parse_duration("2h"), Some(Duration::hours(2)));
        assert_eq!(parse_duration("30s"), Some(Duration::seconds(30)));
        assert_eq!(parse_duration("3600"), Some(Duration::seconds(3600)));
        assert_eq!(parse_duration(" 10m "), Some(Duration::minutes(10)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration("0m"), None);
        assert_eq!(parse_duration("5w"), None);
        assert_eq!(parse_duration("-5m"), None);
        assert_eq!(parse_duration("ten minutes"), None);
    }

    #[test]
    fn test_parse_duration_rejects_out_of_range() {
        assert_eq!(parse_duration("99999999999999d"), None);
        assert_eq!(parse_duration("9000000000000s"), None);
        assert_eq!(parse_duration("99999999999999999999"), None);
        assert_eq!(parse_duration("366d"), None);
        assert_eq!(parse_duration("365d"), Some(Duration::days(365)));
    }
}
