//! # Domain Entities
//!
//! 저장소에 영속화되는 두 엔티티를 정의합니다.
//!
//! | 엔티티 | 관계 | 생명주기 |
//! |--------|------|----------|
//! | [`User`](users::User) | - | 가입 또는 첫 Google 로그인 시 생성, 삭제 없음 |
//! | [`RefreshToken`](tokens::RefreshToken) | N:1 User | 로그인 시 생성, 로그아웃 또는 만료 감지 시 삭제 |
//!
//! 액세스 토큰은 서명된 자기 완결형 토큰이므로 저장하지 않습니다.

pub mod users;
pub mod tokens;

pub use users::*;
pub use tokens::*;
