//! # MongoDB 리프레시 토큰 리포지토리 구현
//!
//! `refresh_tokens` 컬렉션에 세션 레코드를 저장합니다.
//! `token` 유니크 인덱스와 `user_id` 조회용 인덱스를 생성합니다.
//! 문서 저장소에는 외래 키가 없으므로 소유자 존재 여부는 서비스 계층이 확인합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use crate::domain::entities::tokens::RefreshToken;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::{from_bson_datetime, to_bson_datetime};
use crate::repositories::RefreshTokenStore;

const COLLECTION: &str = "refresh_tokens";

/// `refresh_tokens` 컬렉션의 문서 표현
#[derive(Debug, Serialize, Deserialize)]
struct RefreshTokenDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    token: String,
    /// `users._id` 참조
    user_id: ObjectId,
    expiry_date: bson::DateTime,
}

impl RefreshTokenDocument {
    fn into_entity(self) -> AppResult<RefreshToken> {
        let id = self
            .id
            .ok_or_else(|| AppError::DatabaseError("토큰 문서에 _id가 없습니다".to_string()))?;

        Ok(RefreshToken {
            id: id.to_hex(),
            token: self.token,
            user_id: self.user_id.to_hex(),
            expiry_date: from_bson_datetime(self.expiry_date),
        })
    }
}

/// MongoDB 리프레시 토큰 리포지토리
///
/// 문서 저장소에는 외래 키가 없으므로 사용자 삭제 시의 연쇄 삭제는
/// 보장되지 않습니다. 소유자가 사라진 레코드는 갱신 시점에 정리됩니다.
///
/// - **컬렉션명**: `refresh_tokens`
/// - **인덱스**: token(unique), user_id
#[derive(Clone)]
pub struct MongoTokenRepository {
    collection: Collection<RefreshTokenDocument>,
}

impl MongoTokenRepository {
    pub fn new(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection::<RefreshTokenDocument>(COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([token_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for MongoTokenRepository {
    async fn create(
        &self,
        user_id: &str,
        token: &str,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        let user_object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::InternalError(format!("잘못된 사용자 ID: {}", user_id)))?;

        let document = RefreshTokenDocument {
            id: None,
            token: token.to_string(),
            user_id: user_object_id,
            expiry_date: to_bson_datetime(expiry_date),
        };

        let result = self.collection
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 ID가 ObjectId가 아닙니다".to_string()))?;

        Ok(RefreshToken {
            id: id.to_hex(),
            token: document.token,
            user_id: user_id.to_string(),
            expiry_date: from_bson_datetime(document.expiry_date),
        })
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        self.collection
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(RefreshTokenDocument::into_entity)
            .transpose()
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(());
        };

        self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_token(&self, token: &str) -> AppResult<()> {
        let result = self.collection
            .delete_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::debug!("리프레시 토큰 삭제: {}건", result.deleted_count);
        Ok(())
    }
}
