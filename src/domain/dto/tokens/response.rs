use serde::Serialize;
use utoipa::ToSchema;

/// 단순 메시지 응답 `{"msg": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
