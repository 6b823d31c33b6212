//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 액세스 토큰 추출
//! - 서명/만료 검증 후 사용자 ID를 request extension에 저장
//! - 실패 시 401 `{"msg": ...}` 응답으로 요청 종료
//!
//! CORS, Rate Limiting, 보안 헤더, 접근 로그는 `main`에서 프레임워크 제공
//! 미들웨어로 구성합니다.
//!
//! ## 특정 리소스에만 적용
//! ```rust,ignore
//! use actix_web::web;
//!
//! web::scope("/api/auth")
//!     .route("/login", web::post().to(login))
//!     .service(
//!         web::resource("/profile")
//!             .wrap(AuthMiddleware::required())
//!             .route(web::get().to(get_profile)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
