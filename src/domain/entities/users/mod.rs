//! 사용자 엔티티 모듈
//!
//! 저장된 사용자([`User`](user::User))와 저장 전 사용자([`NewUser`](user::NewUser))를 제공합니다.

pub mod user;

pub use user::*;
