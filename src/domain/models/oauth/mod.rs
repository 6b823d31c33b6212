//! 외부 ID 제공자(Google) 관련 모델
//!
//! Google ID 토큰의 클레임과, 검증 후 로컬 계정 매핑에 사용하는
//! 제공자 중립적인 [`FederatedIdentity`](federated_identity::FederatedIdentity)를 정의합니다.

pub mod federated_identity;

pub use federated_identity::*;
