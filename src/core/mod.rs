//! # Core Module
//!
//! 프로세스 전역 상태의 생성과 해제를 담당합니다.
//!
//! 전역 싱글톤 대신 명시적인 [`AppState`]를 시작 시 만들고,
//! `web::Data`로 핸들러와 미들웨어에 전달한 뒤, 종료 시 정리합니다.
//!
//! ```rust,ignore
//! let state = AppState::initialize(DatabaseConfig::backend()).await?;
//! let data = web::Data::new(state.clone());
//! HttpServer::new(move || App::new().app_data(data.clone())).run().await?;
//! state.shutdown().await;
//! ```

pub mod state;

pub use state::AppState;
