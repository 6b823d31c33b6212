//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 가입과 Google 로그인 모두 같은 모델을 사용합니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 사용자 엔티티
///
/// 저장소 구현과 무관한 도메인 표현입니다. `id`는 저장소가 발급한 불투명
/// 식별자(MongoDB ObjectId 16진수 또는 MySQL 정수의 문자열 표현)입니다.
///
/// `password_hash`는 절대 직렬화되지 않습니다. 외부 응답에는
/// [`UserView`](crate::domain::dto::users::response::UserView)를 사용하세요.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// 사용자 이메일 (unique, 대소문자 구분)
    pub email: String,
    /// bcrypt 해시. Google 전용 계정은 임의 비밀번호의 해시를 가집니다.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// 아직 저장되지 않은 사용자
///
/// 저장소의 `create`에 전달되며, 저장소가 ID와 생성 시간을 부여합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>, password_hash: String) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash,
        }
    }

    /// 저장소가 발급한 ID로 엔티티를 완성합니다.
    pub fn into_user(self, id: String, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at,
        }
    }
}
