//! 에러 타입 모듈
//!
//! [`AppError`]와 [`AppResult`]를 크레이트 전역에 노출합니다.

pub mod errors;

pub use errors::*;
