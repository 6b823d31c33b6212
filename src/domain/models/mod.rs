//! # Domain Models
//!
//! 저장되지 않는 도메인 값 객체를 정의합니다.
//!
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`auth`] - 접근 제어 게이트가 요청에 첨부하는 인증 사용자
//! - [`oauth`] - Google ID 토큰 클레임과 검증된 외부 신원

pub mod token;
pub mod auth;
pub mod oauth;

pub use token::*;
pub use auth::*;
pub use oauth::*;
