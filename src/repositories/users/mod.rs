//! 사용자 저장소 구현체
//!
//! [`UserStore`](crate::repositories::UserStore)의 MongoDB, MySQL 구현을 제공합니다.

pub mod user_repo;
pub mod mysql_user_repo;

pub use user_repo::MongoUserRepository;
pub use mysql_user_repo::MySqlUserRepository;
