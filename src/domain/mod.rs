//! # Domain Layer
//!
//! 인증 서비스의 도메인 계층입니다.
//!
//! - [`entities`] - 저장되는 엔티티 (User, RefreshToken)
//! - [`models`] - 저장되지 않는 값 객체 (JWT 클레임, 인증 사용자, 외부 신원)
//! - [`dto`] - HTTP 요청/응답 본문
//!
//! ## 세션 상태 전이
//!
//! ```text
//! (user, refresh token) 쌍의 상태
//!
//!   absent ──login/google──► active ──logout──► revoked
//!                              │
//!                              └──refresh 시 만료 감지──► expired
//! ```
//!
//! `expired`와 `revoked`는 해당 토큰 문자열의 종료 상태이며,
//! 새 로그인은 항상 새 토큰을 발급합니다.

pub mod entities;
pub mod dto;
pub mod models;
