//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 [`AppState`](crate::core::AppState)를 통해 공유됩니다.
//! 저장소와 외부 협력 객체는 trait 객체로 주입되므로 테스트에서는
//! 메모리 저장소와 가짜 검증기로 대체할 수 있습니다.

pub mod auth;
