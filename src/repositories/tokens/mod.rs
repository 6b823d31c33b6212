//! 리프레시 토큰 저장소 구현체
//!
//! 리프레시 토큰은 발급 시 저장되고, 로그아웃 또는 만료 감지 시 삭제됩니다.
//! 레코드는 수정되지 않습니다.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::RefreshTokenStore;
//!
//! let record = tokens.create(&user.id, &refresh_token, RefreshToken::expiry_from(Utc::now())).await?;
//! tokens.delete_by_token(&record.token).await?;
//! ```

pub mod token_repository;
pub mod mysql_token_repository;

pub use token_repository::MongoTokenRepository;
pub use mysql_token_repository::MySqlTokenRepository;
