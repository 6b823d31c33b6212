//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 실패 응답은 프론트엔드 계약에 맞춰 `{"msg": "..."}` 형식으로 직렬화되며,
//! 5xx 계열 에러는 상세 원인을 서버 로그에만 남기고 클라이언트에는
//! `Server Error`만 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
//!     let user = self.users.find_by_email(email).await?
//!         .ok_or(AppError::InvalidCredentials)?;
//!     Ok(user)
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 흐름에서 예상되는 실패(중복 가입, 자격 증명 오류, 리프레시 토큰 상태)와
/// 인프라 실패(데이터베이스, 외부 서비스)를 하나의 열거형으로 표현합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 가입된 이메일 (400 Bad Request)
    #[error("User already exists")]
    UserExists,

    /// 이메일 없음 또는 비밀번호 불일치 (400 Bad Request)
    ///
    /// 계정 존재 여부가 드러나지 않도록 두 경우 모두 같은 변형을 사용합니다.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// 요청에 리프레시 토큰이 없음 (403 Forbidden)
    #[error("Refresh Token is required!")]
    MissingToken,

    /// 저장소에 없는 리프레시 토큰 (403 Forbidden)
    #[error("Refresh token is not in database!")]
    TokenNotFound,

    /// 만료된 리프레시 토큰 (403 Forbidden)
    #[error("Refresh token was expired. Please make a new signin request")]
    TokenExpired,

    /// 외부 ID 토큰 검증 실패 (400 Bad Request)
    #[error("Federation failed: {0}")]
    FederationFailed(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 액세스 토큰 누락/위조/만료 (401 Unauthorized)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출되는 메시지
    ///
    /// 인프라 에러의 상세 내용은 노출하지 않습니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::FederationFailed(_) => "Google Sign-In Failed".to_string(),
            AppError::NotFound(_) => "User not found".to_string(),
            AppError::Unauthorized(msg) | AppError::ValidationError(msg) => msg.clone(),
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => "Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UserExists
            | AppError::InvalidCredentials
            | AppError::FederationFailed(_)
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken | AppError::TokenNotFound | AppError::TokenExpired => {
                StatusCode::FORBIDDEN
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{"msg": ...}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 서버 에러: {}", self);
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "msg": self.client_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_user_exists_response() {
        let (status, body) = body_json(AppError::UserExists).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "User already exists");
    }

    #[actix_web::test]
    async fn test_invalid_credentials_response() {
        let (status, body) = body_json(AppError::InvalidCredentials).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Invalid Credentials");
    }

    #[actix_web::test]
    async fn test_refresh_token_errors_are_forbidden() {
        for error in [AppError::MissingToken, AppError::TokenNotFound, AppError::TokenExpired] {
            assert_eq!(error.status_code(), StatusCode::FORBIDDEN);
        }

        let (_, body) = body_json(AppError::TokenExpired).await;
        assert_eq!(
            body["msg"],
            "Refresh token was expired. Please make a new signin request"
        );
    }

    #[test]
    fn test_unauthorized_error_response() {
        let error = AppError::Unauthorized("Token is not valid".to_string());

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.client_message(), "Token is not valid");
    }

    #[actix_web::test]
    async fn test_internal_errors_hide_details() {
        let (status, body) =
            body_json(AppError::DatabaseError("connection refused at 10.0.0.3".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["msg"], "Server Error");
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_federation_failed_response() {
        let error = AppError::FederationFailed("wrong audience".to_string());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.client_message(), "Google Sign-In Failed");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
