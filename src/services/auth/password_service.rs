//! 비밀번호 해싱 서비스
//!
//! bcrypt(salted adaptive hash)로 비밀번호를 해싱하고 검증합니다.

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

/// 비밀번호 해싱 포트
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;

    /// 해시와 일치하면 `true`. 해시 형식이 잘못된 경우도 `false`입니다.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// bcrypt 기반 구현 (기본 cost 10)
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(PasswordConfig::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or_else(|e| {
            log::error!("비밀번호 해시 검증 에러: {}", e);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);
        let hash = hasher.hash("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hasher.verify("secret1", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = BcryptPasswordHasher::new(4);

        assert_ne!(hasher.hash("secret1").unwrap(), hasher.hash("secret1").unwrap());
    }

    #[test]
    fn test_default_cost_is_ten() {
        let hash = BcryptPasswordHasher::default().hash("pw").unwrap();
        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_invalid_cost_is_an_internal_error() {
        let result = BcryptPasswordHasher::new(99).hash("pw");

        match result {
            Err(crate::errors::AppError::InternalError(msg)) => assert!(msg.contains("비밀번호 해싱 실패")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_hash_does_not_match() {
        assert!(!BcryptPasswordHasher::new(4).verify("pw", "not-a-bcrypt-hash"));
    }
}
