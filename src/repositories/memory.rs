//! 프로세스 메모리 저장소
//!
//! 두 저장소 포트를 하나의 구조체로 구현합니다. 테스트의 결정적 대역이며,
//! `DATABASE_BACKEND=memory`로 로컬 실험에도 사용할 수 있습니다.
//! 프로세스가 종료되면 모든 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domain::entities::tokens::RefreshToken;
use crate::domain::entities::users::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::{RefreshTokenStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, User>>,
    /// 토큰 문자열 -> 레코드
    tokens: Mutex<HashMap<String, RefreshToken>>,
    next_id: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }

    /// 사용자와 그 사용자의 모든 리프레시 토큰을 삭제합니다.
    ///
    /// 인증 흐름에는 사용자 삭제가 없으며, 관계형 저장소의 연쇄 삭제를
    /// 재현하는 관리/테스트 용도입니다.
    pub fn remove_user(&self, user_id: &str) -> AppResult<bool> {
        let removed = lock(&self.users)?.remove(user_id).is_some();
        lock(&self.tokens)?.retain(|_, record| record.user_id != user_id);
        Ok(removed)
    }

    /// 소유자 검사 없이 레코드를 삽입합니다.
    ///
    /// 문서 저장소처럼 소유자가 사라진 토큰이 남는 상황을 재현할 때 사용합니다.
    pub fn insert_orphan_token(&self, user_id: &str, token: &str, expiry_date: DateTime<Utc>) -> AppResult<()> {
        let record = RefreshToken {
            id: self.next_id(),
            token: token.to_string(),
            user_id: user_id.to_string(),
            expiry_date,
        };
        lock(&self.tokens)?.insert(token.to_string(), record);
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        lock(&self.users).map(|users| users.len()).unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        lock(&self.tokens).map(|tokens| tokens.len()).unwrap_or(0)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users)?
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(lock(&self.users)?.get(id).cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut users = lock(&self.users)?;

        // 검사와 삽입이 같은 잠금 안에서 일어나므로 유니크 인덱스와 동일하게 동작한다
        if users.values().any(|existing| existing.email == user.email) {
            return Err(AppError::UserExists);
        }

        let created = user.into_user(self.next_id(), Utc::now());
        users.insert(created.id.clone(), created.clone());
        Ok(created)
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn create(
        &self,
        user_id: &str,
        token: &str,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        if !lock(&self.users)?.contains_key(user_id) {
            return Err(AppError::DatabaseError(format!(
                "존재하지 않는 사용자 참조: {}",
                user_id
            )));
        }

        let mut tokens = lock(&self.tokens)?;
        if tokens.contains_key(token) {
            return Err(AppError::DatabaseError("중복된 리프레시 토큰".to_string()));
        }

        let record = RefreshToken {
            id: self.next_id(),
            token: token.to_string(),
            user_id: user_id.to_string(),
            expiry_date,
        };
        tokens.insert(token.to_string(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        Ok(lock(&self.tokens)?.get(token).cloned())
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        lock(&self.tokens)?.retain(|_, record| record.id != id);
        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> AppResult<()> {
        lock(&self.tokens)?.remove(token);
        Ok(())
    }
}
