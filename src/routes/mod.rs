//! API 라우트 설정 모듈
//!
//! 인증 API 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | POST | `/api/auth/signup` | - |
//! | POST | `/api/auth/login` | - |
//! | POST | `/api/auth/refresh` | - |
//! | POST | `/api/auth/logout` | - |
//! | POST | `/api/auth/google` | - |
//! | GET | `/api/auth/profile` | Bearer 액세스 토큰 |
//! | GET | `/health` | - |
//! | GET | `/api-docs` | - (Swagger UI, OpenAPI JSON은 `/api-docs/openapi.json`) |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes)
//! ```

pub mod api_doc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::core::AppState;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_api_docs(cfg);
}

/// Swagger UI와 OpenAPI JSON을 등록합니다.
///
/// `NormalizePath::trim()`이 후행 슬래시를 제거하므로 `/api-docs`는
/// UI의 `index.html`로 리다이렉트합니다.
fn configure_api_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new(format!("{}/{{_:.*}}", api_doc::SWAGGER_UI_PATH))
            .url(api_doc::OPENAPI_JSON_PATH, api_doc::ApiDoc::openapi()),
    )
    .service(web::redirect(
        api_doc::SWAGGER_UI_PATH,
        format!("{}/index.html", api_doc::SWAGGER_UI_PATH),
    ));
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh)
            .service(handlers::auth::logout)
            .service(handlers::auth::google_login)
            // 인증이 필요한 라우트
            .service(
                web::scope("/profile")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::get_profile)
            )
    );
}

/// JSON 본문 파싱 실패를 `{"msg": ...}` 형식의 400 응답으로 바꿉니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req: &HttpRequest| {
            log::debug!("JSON 본문 파싱 실패: {}", err);
            AppError::ValidationError(format!("Invalid request body: {}", err)).into()
        })
}

#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "credential_auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": state.storage.backend().as_str(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::core::state::testing::memory_state;

    #[actix_web::test]
    async fn test_health_reports_backend() {
        let (state, _) = memory_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_web::test]
    async fn test_openapi_document_lists_auth_endpoints() {
        let (state, _) = memory_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri(api_doc::OPENAPI_JSON_PATH).to_request();
        let doc: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        for path in ["signup", "login", "refresh", "logout", "google"] {
            assert!(
                doc["paths"][format!("/api/auth/{}", path)]["post"].is_object(),
                "missing POST /api/auth/{}",
                path
            );
        }

        let profile = &doc["paths"]["/api/auth/profile"]["get"];
        assert!(profile["security"][0]["bearerAuth"].is_array());
        assert_eq!(doc["components"]["securitySchemes"]["bearerAuth"]["scheme"], "bearer");

        let token_request = &doc["components"]["schemas"]["TokenRequest"]["properties"];
        assert!(token_request["requestToken"].is_object());
        assert!(doc["components"]["schemas"]["ProfileResponse"]["properties"]["createdAt"].is_object());
        assert!(doc["components"]["schemas"]["ProfileResponse"]["properties"]["password_hash"].is_null());
    }

    #[actix_web::test]
    async fn test_swagger_ui_is_served() {
        let (state, _) = memory_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api-docs").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_redirection());

        let req = test::TestRequest::get().uri("/api-docs/index.html").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());
    }
}
