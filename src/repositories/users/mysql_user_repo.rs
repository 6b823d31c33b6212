//! # MySQL 사용자 리포지토리 구현
//!
//! `users` 테이블에 대한 데이터 액세스를 담당합니다.
//! 테이블 정의는 [`MySqlDatabase`](crate::db::MySqlDatabase)가 시작 시 생성합니다.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use crate::domain::entities::users::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserStore;

/// `users` 테이블 행
#[derive(Debug, FromRow)]
struct UserRow {
    id: u64,
    username: String,
    email: String,
    password_hash: String,
    created_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id.to_string(),
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at.and_utc(),
        }
    }
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// MySQL 사용자 데이터 액세스 리포지토리
///
/// ID는 `BIGINT UNSIGNED AUTO_INCREMENT` 값의 10진수 문자열로 노출됩니다.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(id) = id.parse::<u64>() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        // DATETIME(3) 정밀도에 맞춘다
        let now = Utc::now();
        let created_at = DateTime::<Utc>::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now);

        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(created_at.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::UserExists
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        Ok(user.into_user(result.last_insert_id().to_string(), created_at))
    }
}
