//! 토큰 요청 및 공통 메시지 응답 DTO

pub mod request;
pub mod response;

pub use request::TokenRequest;
pub use response::MessageResponse;
