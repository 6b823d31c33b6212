//! 자격 증명 기반 인증 서비스
//!
//! 이메일/비밀번호 회원가입과 로그인, 서버 측에서 폐기 가능한 리프레시 토큰 세션,
//! JWT 액세스 토큰으로 보호되는 프로필 조회, Google ID 토큰 로그인을 제공합니다.
//!
//! # Features
//!
//! - **로컬 인증**: bcrypt 해시 기반 회원가입/로그인
//! - **JWT 인증**: 서로 다른 비밀키로 서명한 액세스/리프레시 토큰
//! - **세션 관리**: 리프레시 토큰 저장, 만료 감지, 로그아웃 폐기
//! - **Google 로그인**: ID 토큰 검증 후 이메일 기준 계정 연결
//! - **저장소 선택**: MongoDB, MySQL, 메모리 중 설정으로 선택
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 보호된 라우트의 액세스 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증/응답 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthService   │ ← 세션 생명주기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Storage Port   │ ← MongoDB | MySQL | Memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use credential_auth::config::DatabaseConfig;
//! use credential_auth::core::AppState;
//!
//! let state = AppState::initialize(DatabaseConfig::backend()).await?;
//! let response = state.auth_service.login("a@x.com", "secret1").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
