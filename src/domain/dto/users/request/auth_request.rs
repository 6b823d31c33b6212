//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
//! 형식 검증은 HTTP 계층에서 `validator`로 수행하며, 서비스 계층은
//! 검증된 값만 전달받습니다.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// 회원가입 요청 구조체
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 로컬 로그인 요청 구조체
///
/// 이메일 형식은 검사하지 않습니다. 잘못된 이메일은 존재하지 않는 계정과
/// 동일하게 `Invalid Credentials`로 응답합니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Google 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GoogleLoginRequest {
    /// 프론트엔드가 Google Identity Services로 받은 ID 토큰
    #[validate(length(min = 1, message = "Google ID token is required"))]
    pub token: String,
}
