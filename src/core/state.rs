//! 프로세스 전역 애플리케이션 상태
//!
//! 시작 시 한 번 생성되어 `web::Data<AppState>`로 모든 워커에 공유되고,
//! 서버가 멈춘 뒤 [`AppState::shutdown`]으로 정리됩니다.

use std::sync::Arc;
use log::info;
use crate::config::StorageBackend;
use crate::db::Storage;
use crate::errors::AppResult;
use crate::services::auth::{
    AuthService, BcryptPasswordHasher, GoogleIdTokenVerifier, IdentityVerifier, JwtTokenService,
    PasswordHasher, TokenSigner,
};

/// 요청 처리에 필요한 공유 객체 묶음
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    /// 접근 제어 게이트가 액세스 토큰을 검증할 때 사용합니다.
    pub token_signer: Arc<dyn TokenSigner>,
    pub storage: Storage,
}

impl AppState {
    /// 저장소에 연결하고 설정값으로 모든 협력 객체를 생성합니다.
    pub async fn initialize(backend: StorageBackend) -> AppResult<Self> {
        info!("📡 저장소 연결 중... ({})", backend.as_str());
        let storage = Storage::connect(backend).await?;

        let state = Self::new(
            storage,
            Arc::new(JwtTokenService::from_config()),
            Arc::new(BcryptPasswordHasher::from_config()),
            Arc::new(GoogleIdTokenVerifier::from_config()),
        );

        info!("✅ 인증 서비스 초기화 완료");
        Ok(state)
    }

    /// 이미 준비된 저장소와 협력 객체로 상태를 구성합니다.
    pub fn new(
        storage: Storage,
        token_signer: Arc<dyn TokenSigner>,
        hasher: Arc<dyn PasswordHasher>,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        let auth_service = AuthService::new(
            storage.users(),
            storage.tokens(),
            token_signer.clone(),
            hasher,
            verifier,
        );

        Self {
            auth_service: Arc::new(auth_service),
            token_signer,
            storage,
        }
    }

    pub async fn shutdown(self) {
        info!("🛑 애플리케이션 상태 정리 중...");
        self.storage.shutdown().await;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::repositories::memory::MemoryStore;
    use crate::services::auth::auth_service::tests::{signer, FakeVerifier};

    /// 메모리 저장소, cost 4 해셔, 가짜 Google 검증기로 구성된 상태
    pub(crate) fn memory_state() -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(
            Storage::Memory(store.clone()),
            signer(),
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(FakeVerifier),
        );
        (state, store)
    }
}
