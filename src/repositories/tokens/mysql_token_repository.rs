//! # MySQL 리프레시 토큰 리포지토리 구현
//!
//! `refresh_tokens` 테이블에 대한 데이터 액세스를 담당합니다.
//! 사용자 행이 삭제되면 외래 키 `ON DELETE CASCADE`로 토큰도 함께 삭제됩니다.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use crate::domain::entities::tokens::RefreshToken;
use crate::errors::{AppError, AppResult};
use crate::repositories::RefreshTokenStore;

/// `refresh_tokens` 테이블 행
#[derive(Debug, FromRow)]
struct RefreshTokenRow {
    id: u64,
    token: String,
    user_id: u64,
    expiry_date: NaiveDateTime,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        RefreshToken {
            id: row.id.to_string(),
            token: row.token,
            user_id: row.user_id.to_string(),
            expiry_date: row.expiry_date.and_utc(),
        }
    }
}

/// MySQL 리프레시 토큰 리포지토리
///
/// `user_id` 외래 키는 `ON DELETE CASCADE`이므로 사용자 삭제 시 토큰도 함께 삭제됩니다.
#[derive(Clone)]
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenStore for MySqlTokenRepository {
    async fn create(
        &self,
        user_id: &str,
        token: &str,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        let owner = user_id
            .parse::<u64>()
            .map_err(|_| AppError::InternalError(format!("잘못된 사용자 ID: {}", user_id)))?;
        let expiry = DateTime::<Utc>::from_timestamp_millis(expiry_date.timestamp_millis())
            .unwrap_or(expiry_date);

        let result = sqlx::query(
            "INSERT INTO refresh_tokens (token, user_id, expiry_date) VALUES (?, ?, ?)",
        )
        .bind(token)
        .bind(owner)
        .bind(expiry.naive_utc())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(RefreshToken {
            id: result.last_insert_id().to_string(),
            token: token.to_string(),
            user_id: user_id.to_string(),
            expiry_date: expiry,
        })
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            "SELECT id, token, user_id, expiry_date FROM refresh_tokens WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(RefreshToken::from))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let Ok(id) = id.parse::<u64>() else {
            return Ok(());
        };

        sqlx::query("DELETE FROM refresh_tokens WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::debug!("리프레시 토큰 삭제: {}건", result.rows_affected());
        Ok(())
    }
}
