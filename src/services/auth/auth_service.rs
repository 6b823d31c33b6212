//! # 인증 서비스 구현
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃, 프로필 조회, Google 로그인을
//! 조율하는 핵심 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        AuthService                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  signup · login · refresh · logout · profile · google       │
//! └─────────────────────────────────────────────────────────────┘
//!        │               │               │               │
//!        ▼               ▼               ▼               ▼
//!   UserStore   RefreshTokenStore   TokenSigner   IdentityVerifier
//!                                   PasswordHasher
//! ```
//!
//! ## 세션 생명주기
//!
//! (사용자, 리프레시 토큰) 쌍은 `absent → active → (expired | revoked)`로만 전이합니다.
//! 만료/폐기된 토큰 문자열은 되살아나지 않으며, 로그인할 때마다 새 토큰이 발급됩니다.
//! 리프레시 토큰은 사용 시 교체(rotation)되지 않습니다.

use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;
use crate::domain::dto::users::response::{LoginResponse, ProfileResponse};
use crate::domain::entities::tokens::RefreshToken;
use crate::domain::entities::users::{NewUser, User};
use crate::domain::models::token::TokenPair;
use crate::errors::{AppError, AppResult};
use crate::repositories::{RefreshTokenStore, UserStore};
use crate::services::auth::google_auth_service::IdentityVerifier;
use crate::services::auth::password_service::PasswordHasher;
use crate::services::auth::token_service::TokenSigner;

/// 인증 흐름 오케스트레이터
///
/// 모든 협력 객체를 생성자로 주입받습니다. 내부에 가변 상태가 없으므로
/// `Arc`로 공유해 여러 워커에서 동시에 사용할 수 있습니다.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<dyn RefreshTokenStore>,
    signer: Arc<dyn TokenSigner>,
    hasher: Arc<dyn PasswordHasher>,
    verifier: Arc<dyn IdentityVerifier>,
    /// 등록되지 않은 이메일 로그인에서 검증 비용을 맞추기 위한 해시
    decoy_hash: Option<String>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: Arc<dyn RefreshTokenStore>,
        signer: Arc<dyn TokenSigner>,
        hasher: Arc<dyn PasswordHasher>,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        let decoy_hash = hasher
            .hash(&Uuid::new_v4().simple().to_string())
            .map_err(|e| log::warn!("로그인 비교용 해시 생성 실패: {}", e))
            .ok();

        Self {
            users,
            tokens,
            signer,
            hasher,
            verifier,
            decoy_hash,
        }
    }

    /// 로컬 계정을 생성합니다. 토큰은 발급하지 않습니다.
    ///
    /// # Errors
    ///
    /// * [`AppError::UserExists`] - 이메일이 이미 등록됨 (동시 가입 경쟁 포함)
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        if self.users.find_by_email(email).await?.is_some() {
            log::info!("중복 가입 시도");
            return Err(AppError::UserExists);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self.users.create(NewUser::new(username, email, password_hash)).await?;

        log::info!("신규 사용자 가입: id={}", user.id);
        Ok(user)
    }

    /// 이메일/비밀번호로 로그인합니다.
    ///
    /// 계정이 없는 경우와 비밀번호가 틀린 경우 모두 같은 에러를 반환하며,
    /// 두 경우 모두 해시 검증을 한 번 수행합니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let Some(user) = self.users.find_by_email(email).await? else {
            if let Some(decoy) = &self.decoy_hash {
                self.hasher.verify(password, decoy);
            }
            log::warn!("로그인 실패: 등록되지 않은 이메일");
            return Err(AppError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            log::warn!("로그인 실패: 비밀번호 불일치 (user={})", user.id);
            return Err(AppError::InvalidCredentials);
        }

        let tokens = self.start_session(&user).await?;
        log::info!("로그인 성공: user={}", user.id);

        Ok(LoginResponse::new(tokens, &user))
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 반환되는 리프레시 토큰은 요청에 사용된 것과 같습니다.
    ///
    /// # Errors
    ///
    /// * [`AppError::MissingToken`] - 토큰이 없음
    /// * [`AppError::TokenNotFound`] - 저장소에 없음 (폐기됨, 이미 만료 처리됨, 소유자 없음)
    /// * [`AppError::TokenExpired`] - 만료됨. 레코드는 삭제되어 다음 시도는 `TokenNotFound`
    pub async fn refresh_access_token(&self, request_token: Option<&str>) -> AppResult<TokenPair> {
        let request_token = request_token
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)?;

        let record = self
            .tokens
            .find_by_token(request_token)
            .await?
            .ok_or(AppError::TokenNotFound)?;

        if record.is_expired() {
            self.tokens.delete_by_id(&record.id).await?;
            log::info!("만료된 리프레시 토큰 삭제: user={}", record.user_id);
            return Err(AppError::TokenExpired);
        }

        let Some(user) = self.users.find_by_id(&record.user_id).await? else {
            // 외래 키가 없는 저장소에서 소유자가 사라진 경우
            self.tokens.delete_by_id(&record.id).await?;
            log::warn!("소유자가 없는 리프레시 토큰 삭제: user={}", record.user_id);
            return Err(AppError::TokenNotFound);
        };

        let access_token = self.signer.issue_access_token(&user.id)?;
        log::debug!("액세스 토큰 갱신: user={}", user.id);

        Ok(TokenPair {
            access_token,
            refresh_token: record.token,
        })
    }

    /// 리프레시 토큰을 폐기합니다. 토큰이 없거나 모르는 토큰이어도 성공합니다.
    ///
    /// 이미 발급된 액세스 토큰은 자체 만료 시점까지 유효합니다.
    pub async fn logout(&self, request_token: Option<&str>) -> AppResult<()> {
        match request_token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.tokens.delete_by_token(token).await?;
                log::info!("로그아웃: 리프레시 토큰 폐기");
            }
            None => log::debug!("토큰 없는 로그아웃 요청"),
        }

        Ok(())
    }

    /// 인증된 사용자의 프로필을 반환합니다.
    pub async fn get_profile(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

        Ok(ProfileResponse::from(user))
    }

    /// Google ID 토큰으로 로그인합니다.
    ///
    /// 같은 이메일의 계정이 없으면 임의 비밀번호 해시를 가진 계정을 만듭니다.
    /// 이 계정은 로컬 비밀번호로는 로그인할 수 없습니다.
    pub async fn federated_login(&self, external_token: &str) -> AppResult<LoginResponse> {
        let identity = self.verifier.verify(external_token).await?;

        let user = match self.users.find_by_email(&identity.email).await? {
            Some(user) => user,
            None => {
                let random_password = Uuid::new_v4().simple().to_string();
                let password_hash = self.hasher.hash(&random_password)?;
                let new_user = NewUser::new(identity.display_name.clone(), identity.email.clone(), password_hash);

                match self.users.create(new_user).await {
                    Ok(user) => {
                        log::info!("Google 계정으로 신규 사용자 생성: id={}", user.id);
                        user
                    }
                    // 같은 이메일로 동시에 들어온 요청이 먼저 계정을 만든 경우
                    Err(AppError::UserExists) => self
                        .users
                        .find_by_email(&identity.email)
                        .await?
                        .ok_or_else(|| AppError::InternalError("생성 경쟁 후 사용자를 찾을 수 없습니다".to_string()))?,
                    Err(e) => return Err(e),
                }
            }
        };

        let tokens = self.start_session(&user).await?;
        log::info!("Google 로그인 성공: user={}", user.id);

        Ok(LoginResponse::new(tokens, &user))
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰을 7일 만료로 저장합니다.
    async fn start_session(&self, user: &User) -> AppResult<TokenPair> {
        let access_token = self.signer.issue_access_token(&user.id)?;
        let refresh_token = self.signer.issue_refresh_token(&user.id)?;

        self.tokens
            .create(&user.id, &refresh_token, RefreshToken::expiry_from(Utc::now()))
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
