//! 사용자 응답 DTO
//!
//! 비밀번호 해시를 포함하지 않는 공개 사용자 표현입니다.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;

/// 공개 사용자 뷰 `{id, username, email}`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// 프로필 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            created_at,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            created_at,
        }
    }
}

/// 로그인(로컬/Google) 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserView,
}

impl LoginResponse {
    pub fn new(tokens: TokenPair, user: &User) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: UserView::from(user),
        }
    }
}
