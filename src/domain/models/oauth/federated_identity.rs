//! Google ID 토큰 클레임과 검증된 외부 신원

use serde::Deserialize;

/// 검증이 끝난 외부 신원
///
/// 로컬 계정은 `email`로 연결됩니다. `subject`는 제공자 내부의 고유 ID입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct FederatedIdentity {
    pub email: String,
    pub display_name: String,
    pub subject: String,
}

/// Google ID 토큰 페이로드 중 사용하는 클레임
///
/// `aud`, `iss`, `exp`는 서명 검증 단계에서 `jsonwebtoken`이 확인합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleIdTokenClaims {
    pub sub: String,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
}

impl GoogleIdTokenClaims {
    /// 클레임을 [`FederatedIdentity`]로 변환합니다.
    ///
    /// 이메일이 없거나, `email_verified`가 명시적으로 `false`이면 실패합니다.
    /// 이름이 없으면 이메일의 로컬 파트를 표시 이름으로 사용합니다.
    pub fn into_identity(self) -> Result<FederatedIdentity, String> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| "ID token has no email claim".to_string())?;

        if self.email_verified == Some(false) {
            return Err("Google account email is not verified".to_string());
        }

        let display_name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());

        Ok(FederatedIdentity {
            email,
            display_name,
            subject: self.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(email: Option<&str>, verified: Option<bool>, name: Option<&str>) -> GoogleIdTokenClaims {
        GoogleIdTokenClaims {
            sub: "1098765".to_string(),
            email: email.map(str::to_string),
            email_verified: verified,
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_identity_from_full_claims() {
        let identity = claims(Some("bob@gmail.com"), Some(true), Some("Bob Smith"))
            .into_identity()
            .unwrap();

        assert_eq!(identity.email, "bob@gmail.com");
        assert_eq!(identity.display_name, "Bob Smith");
        assert_eq!(identity.subject, "1098765");
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        let identity = claims(Some("carol@gmail.com"), None, None).into_identity().unwrap();
        assert_eq!(identity.display_name, "carol");
    }

    #[test]
    fn test_rejects_missing_or_unverified_email() {
        assert!(claims(None, Some(true), Some("x")).into_identity().is_err());
        assert!(claims(Some(""), Some(true), Some("x")).into_identity().is_err());
        assert!(claims(Some("dan@gmail.com"), Some(false), Some("Dan")).into_identity().is_err());
    }

    #[test]
    fn test_deserializes_google_payload() {
        let payload = serde_json::json!({
            "iss": "https://accounts.google.com",
            "aud": "client-id",
            "sub": "1234",
            "email": "eve@gmail.com",
            "email_verified": true,
            "name": "Eve",
            "exp": 1700000000
        });

        let claims: GoogleIdTokenClaims = serde_json::from_value(payload).unwrap();
        assert_eq!(claims.sub, "1234");
        assert_eq!(claims.email_verified, Some(true));
    }
}
