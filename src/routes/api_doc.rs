//! OpenAPI 문서 정의
//!
//! 인증 API의 OpenAPI 3 문서를 생성합니다. `/api-docs`에서 Swagger UI로,
//! `/api-docs/openapi.json`에서 원본 JSON으로 제공됩니다.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use crate::domain::dto::tokens::{MessageResponse, TokenRequest};
use crate::domain::dto::users::request::{GoogleLoginRequest, LoginRequest, SignupRequest};
use crate::domain::dto::users::response::{LoginResponse, ProfileResponse, UserView};
use crate::domain::models::token::TokenPair;
use crate::handlers;

/// Swagger UI 경로
pub const SWAGGER_UI_PATH: &str = "/api-docs";

/// OpenAPI JSON 경로
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Credential Auth API",
        description = "Authentication API for frontend developers"
    ),
    paths(
        handlers::auth::signup,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::auth::get_profile,
        handlers::auth::google_login,
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        GoogleLoginRequest,
        TokenRequest,
        MessageResponse,
        UserView,
        LoginResponse,
        ProfileResponse,
        TokenPair,
    )),
    modifiers(&BearerAuth),
    tags((name = "Auth", description = "User authentication"))
)]
pub struct ApiDoc;

/// `bearerAuth` 보안 스킴 (JWT 액세스 토큰)
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .build();

        components.add_security_scheme("bearerAuth", SecurityScheme::Http(scheme));
    }
}
