//! # MongoDB 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: `email` 유니크 인덱스가 중복 가입의 유일한 방어선입니다
//! - **불투명 ID**: 외부에는 ObjectId의 16진수 문자열만 노출합니다

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::repositories::UserStore;

const COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY: i32 = 11000;

/// `users` 컬렉션의 문서 표현
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    username: String,
    email: String,
    password_hash: String,
    created_at: bson::DateTime,
}

impl UserDocument {
    fn into_entity(self) -> AppResult<User> {
        let id = self
            .id
            .ok_or_else(|| AppError::DatabaseError("사용자 문서에 _id가 없습니다".to_string()))?;

        Ok(User {
            id: id.to_hex(),
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: from_bson_datetime(self.created_at),
        })
    }
}

pub(crate) fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub(crate) fn from_bson_datetime(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

/// MongoDB 사용자 데이터 액세스 리포지토리
///
/// ## 컬렉션
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(&database.get_database());
/// repo.create_indexes().await?;
///
/// let created = repo.create(NewUser::new("alice", "a@x.com", hash)).await?;
/// let found = repo.find_by_email("a@x.com").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection::<UserDocument>(COLLECTION),
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출되며, 이미 존재하면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(UserDocument::into_entity)
            .transpose()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(UserDocument::into_entity)
            .transpose()
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let created_at = Utc::now();
        let document = UserDocument {
            id: None,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: to_bson_datetime(created_at),
        };

        let result = self.collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::UserExists
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 ID가 ObjectId가 아닙니다".to_string()))?;

        // 저장소 정밀도(ms)에 맞춰 반환값과 조회값이 같도록 맞춘다
        Ok(user.into_user(id.to_hex(), from_bson_datetime(to_bson_datetime(created_at))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_round_trip_keeps_millis() {
        let now = Utc::now();
        let restored = from_bson_datetime(to_bson_datetime(now));

        assert_eq!(restored.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn test_document_without_id_is_rejected() {
        let document = UserDocument {
            id: None,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: bson::DateTime::now(),
        };

        assert!(matches!(document.into_entity(), Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_document_maps_to_entity() {
        let oid = ObjectId::new();
        let document = UserDocument {
            id: Some(oid),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: bson::DateTime::from_millis(1_700_000_000_000),
        };

        let user = document.into_entity().unwrap();

        assert_eq!(user.id, oid.to_hex());
        assert_eq!(user.created_at.timestamp(), 1_700_000_000);
    }
}
