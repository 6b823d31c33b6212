//! JWT 인증 미들웨어 (접근 제어 게이트)
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 ID를 추출합니다.
//! 상태가 없으며 저장소에 접근하지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 보호된 스코프에 적용하는 인증 미들웨어
///
/// 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
/// Request Extensions에 저장하고, 실패하면 401 `{"msg": ...}`로 요청을 끝냅니다.
///
/// ```rust,ignore
/// web::resource("/profile")
///     .wrap(AuthMiddleware::required())
///     .route(web::get().to(get_profile))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Duration;
    use crate::core::state::testing::memory_state;
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::{JwtTokenService, TokenSigner};

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    macro_rules! gated_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .service(
                        web::resource("/whoami")
                            .wrap(AuthMiddleware::required())
                            .route(web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    macro_rules! status_and_msg {
        ($app:expr, $auth:expr) => {{
            let mut req = test::TestRequest::get().uri("/whoami");
            if let Some(value) = $auth {
                req = req.insert_header(("Authorization", value.to_string()));
            }
            let res = test::call_service(&$app, req.to_request()).await;
            let status = res.status().as_u16();
            let body = test::read_body(res).await;
            (status, serde_json::from_slice::<serde_json::Value>(&body).unwrap_or(serde_json::Value::Null))
        }};
    }

    #[actix_web::test]
    async fn test_valid_token_passes_with_user_id() {
        let (state, _) = memory_state();
        let token = state.token_signer.issue_access_token("42").unwrap();
        let app = gated_app!(state);

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert_eq!(test::read_body(res).await, "42");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let (state, _) = memory_state();
        let app = gated_app!(state);

        let (status, body) = status_and_msg!(app, None::<&str>);

        assert_eq!(status, 401);
        assert_eq!(body["msg"], "No token, authorization denied");
    }

    #[actix_web::test]
    async fn test_malformed_scheme_is_unauthorized() {
        let (state, _) = memory_state();
        let token = state.token_signer.issue_access_token("42").unwrap();
        let app = gated_app!(state);

        let (status, _) = status_and_msg!(app, Some(&format!("Token {}", token)));
        assert_eq!(status, 401);

        let (status, _) = status_and_msg!(app, Some(&token));
        assert_eq!(status, 401);
    }

    #[actix_web::test]
    async fn test_wrong_secret_is_unauthorized() {
        let (state, _) = memory_state();
        let forged = JwtTokenService::new("attacker", "attacker-refresh", Duration::minutes(5), Duration::days(1))
            .issue_access_token("42")
            .unwrap();
        let app = gated_app!(state);

        let (status, body) = status_and_msg!(app, Some(&format!("Bearer {}", forged)));

        assert_eq!(status, 401);
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[actix_web::test]
    async fn test_expired_token_is_unauthorized() {
        let (state, _) = memory_state();
        let expired = JwtTokenService::new(
            "test-access-secret",
            "test-refresh-secret",
            Duration::minutes(-5),
            Duration::days(7),
        )
        .issue_access_token("42")
        .unwrap();
        let app = gated_app!(state);

        let (status, body) = status_and_msg!(app, Some(&format!("Bearer {}", expired)));

        assert_eq!(status, 401);
        assert_eq!(body["msg"], "Token is not valid");
    }

    #[actix_web::test]
    async fn test_refresh_token_cannot_open_gate() {
        let (state, _) = memory_state();
        let refresh = state.token_signer.issue_refresh_token("42").unwrap();
        let app = gated_app!(state);

        let (status, _) = status_and_msg!(app, Some(&format!("Bearer {}", refresh)));
        assert_eq!(status, 401);
    }
}
