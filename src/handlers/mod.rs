//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 입력 검증, 응답 직렬화       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   AuthService - 인증 흐름                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore / RefreshTokenStore                ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`에서 서비스를 꺼내 쓰며, 실패는
//! [`AppError`](crate::errors::AppError)로 반환해 `{"msg": ...}` 응답으로 변환합니다.

pub mod auth;
