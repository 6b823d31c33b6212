//! 접근 제어 게이트가 요청에 첨부하는 인증 정보

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// 액세스 토큰에서 추출된 사용자 정보
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 검증에 성공하면
/// Request Extensions에 저장하며, 핸들러는 추출자로 받아 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(crate::errors::AppError::Unauthorized(
                "No token, authorization denied".to_string(),
            )
            .into())),
        }
    }
}
