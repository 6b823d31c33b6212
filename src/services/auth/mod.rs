//! 인증 및 보안 서비스 모듈
//!
//! 인증 흐름의 오케스트레이터와 그 협력 객체(포트와 구현)를 제공합니다.
//!
//! | 포트 | 구현 | 역할 |
//! |------|------|------|
//! | [`TokenSigner`] | [`JwtTokenService`] | HS256 액세스/리프레시 토큰 발급, 액세스 토큰 검증 |
//! | [`PasswordHasher`] | [`BcryptPasswordHasher`] | bcrypt 해싱/검증 |
//! | [`IdentityVerifier`] | [`GoogleIdTokenVerifier`] | Google ID 토큰 검증 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let response = auth_service.login("a@x.com", "secret1").await?;
//! let refreshed = auth_service.refresh_access_token(Some(&response.refresh_token)).await?;
//! ```

pub mod token_service;
pub mod password_service;
pub mod google_auth_service;
pub mod auth_service;

pub use token_service::*;
pub use password_service::*;
pub use google_auth_service::*;
pub use auth_service::AuthService;
