//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 인증 서비스가 의존하는 저장소 포트([`UserStore`], [`RefreshTokenStore`])와
//! 그 구현체들을 제공합니다. 구현체는 설정(`DATABASE_BACKEND`)에 따라
//! 시작 시 하나가 선택되며, 서비스 계층은 trait 객체로만 접근합니다.
//!
//! | 백엔드 | 사용자 | 리프레시 토큰 |
//! |--------|--------|---------------|
//! | MongoDB | [`MongoUserRepository`](users::MongoUserRepository) | [`MongoTokenRepository`](tokens::MongoTokenRepository) |
//! | MySQL | [`MySqlUserRepository`](users::MySqlUserRepository) | [`MySqlTokenRepository`](tokens::MySqlTokenRepository) |
//! | 메모리 | [`MemoryStore`](memory::MemoryStore) | [`MemoryStore`](memory::MemoryStore) |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::UserStore;
//!
//! async fn exists(users: &dyn UserStore, email: &str) -> AppResult<bool> {
//!     Ok(users.find_by_email(email).await?.is_some())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domain::entities::tokens::RefreshToken;
use crate::domain::entities::users::{NewUser, User};
use crate::errors::AppResult;

pub mod users;
pub mod tokens;
pub mod memory;

/// 사용자 저장소 포트
///
/// 사용자는 생성만 되고 이 계층에서 수정/삭제되지 않습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일(대소문자 구분)로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// ID로 사용자를 조회합니다. 백엔드가 해석할 수 없는 ID는 `None`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자를 생성합니다.
    ///
    /// 이메일 유니크 제약 위반은 [`AppError::UserExists`](crate::errors::AppError::UserExists)로
    /// 보고되어야 합니다. 동시 가입 경쟁 상황의 유일한 정합성 장치입니다.
    async fn create(&self, user: NewUser) -> AppResult<User>;
}

/// 리프레시 토큰 저장소 포트
///
/// 삭제 연산은 멱등적입니다. 존재하지 않는 레코드를 삭제해도 에러가 아닙니다.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    async fn create(
        &self,
        user_id: &str,
        token: &str,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<RefreshToken>;

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>>;

    async fn delete_by_id(&self, id: &str) -> AppResult<()>;

    async fn delete_by_token(&self, token: &str) -> AppResult<()>;
}
