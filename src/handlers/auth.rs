//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 라우트는 `/api/auth` 스코프 아래에 등록됩니다.
//!
//! # Endpoints
//!
//! - **회원가입**: `POST /signup` → 201
//! - **로컬 로그인**: `POST /login` → 토큰 쌍 + 사용자 정보
//! - **토큰 갱신**: `POST /refresh` → 새 액세스 토큰 + 기존 리프레시 토큰
//! - **로그아웃**: `POST /logout` → 리프레시 토큰 폐기
//! - **프로필**: `GET /profile` (인증 필요)
//! - **Google 로그인**: `POST /google` → 토큰 쌍 + 사용자 정보
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::tokens::{MessageResponse, TokenRequest};
use crate::domain::dto::users::response::{LoginResponse, ProfileResponse};
use crate::domain::dto::users::request::{GoogleLoginRequest, LoginRequest, SignupRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;
use crate::errors::AppError;

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Auth",
    summary = "Register a new user",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "User already exists or invalid input", body = MessageResponse),
    )
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state.auth_service
        .signup(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    summary = "Login a user",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse),
    )
)]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 본문이 없거나 JSON이 아니어도 토큰 누락(403)으로 처리합니다.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "Auth",
    summary = "Refresh access token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "New access token generated", body = TokenPair),
        (status = 403, description = "Missing, unknown or expired refresh token", body = MessageResponse),
    )
)]
#[post("/refresh")]
pub async fn refresh(
    state: web::Data<AppState>,
    payload: Option<web::Json<TokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.map(web::Json::into_inner).unwrap_or_default();

    let tokens = state.auth_service
        .refresh_access_token(request.token())
        .await?;

    Ok(HttpResponse::Ok().json(tokens))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    summary = "Logout (invalidate refresh token)",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Logged out successfully", body = MessageResponse),
    )
)]
#[post("/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    payload: Option<web::Json<TokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = payload.map(web::Json::into_inner).unwrap_or_default();

    state.auth_service.logout(request.token()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Logged out successfully!")))
}

/// 인증 미들웨어 뒤에서만 호출됩니다.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "Auth",
    summary = "Get current user profile",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "User profile data", body = ProfileResponse),
        (status = 401, description = "Token missing or invalid", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
    )
)]
#[get("")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = state.auth_service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[utoipa::path(
    post,
    path = "/api/auth/google",
    tag = "Auth",
    summary = "Login with Google",
    request_body = GoogleLoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Google Sign-In Failed", body = MessageResponse),
    )
)]
#[post("/google")]
pub async fn google_login(
    state: web::Data<AppState>,
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::FederationFailed(e.to_string()))?;

    let response = state.auth_service
        .federated_login(&payload.token)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use crate::core::state::testing::memory_state;
    use crate::repositories::RefreshTokenStore;
    use crate::routes::configure_all_routes;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .wrap(actix_web::middleware::NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    macro_rules! post_json {
        ($app:expr, $uri:expr, $body:expr) => {{
            let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
            let res = test::call_service(&$app, req).await;
            let status = res.status().as_u16();
            let body: Value = test::read_body_json(res).await;
            (status, body)
        }};
    }

    #[actix_web::test]
    async fn test_full_session_scenario() {
        let (state, _) = memory_state();
        let app = app!(state);

        let (status, body) = post_json!(app, "/api/auth/signup",
            json!({"username": "alice", "email": "a@x.com", "password": "secret1"}));
        assert_eq!(status, 201);
        assert_eq!(body["msg"], "User registered successfully");

        let (status, body) = post_json!(app, "/api/auth/login",
            json!({"email": "a@x.com", "password": "wrong"}));
        assert_eq!(status, 400);
        assert_eq!(body["msg"], "Invalid Credentials");

        let (status, login) = post_json!(app, "/api/auth/login",
            json!({"email": "a@x.com", "password": "secret1"}));
        assert_eq!(status, 200);
        assert_eq!(login["user"]["username"], "alice");
        assert!(login["user"].get("password").is_none());
        let refresh_token = login["refreshToken"].as_str().unwrap().to_string();
        let access_token = login["accessToken"].as_str().unwrap().to_string();

        let (status, refreshed) = post_json!(app, "/api/auth/refresh",
            json!({"requestToken": refresh_token}));
        assert_eq!(status, 200);
        assert_eq!(refreshed["refreshToken"], refresh_token.as_str());
        assert_ne!(refreshed["accessToken"], access_token.as_str());

        let (status, body) = post_json!(app, "/api/auth/logout",
            json!({"requestToken": refresh_token}));
        assert_eq!(status, 200);
        assert_eq!(body["msg"], "Logged out successfully!");

        let (status, body) = post_json!(app, "/api/auth/refresh",
            json!({"requestToken": refresh_token}));
        assert_eq!(status, 403);
        assert_eq!(body["msg"], "Refresh token is not in database!");
    }

    #[actix_web::test]
    async fn test_duplicate_signup() {
        let (state, _) = memory_state();
        let app = app!(state);
        let body = json!({"username": "alice", "email": "a@x.com", "password": "secret1"});

        let (status, _) = post_json!(app, "/api/auth/signup", &body);
        assert_eq!(status, 201);

        let (status, response) = post_json!(app, "/api/auth/signup", &body);
        assert_eq!(status, 400);
        assert_eq!(response["msg"], "User already exists");
    }

    #[actix_web::test]
    async fn test_signup_validation() {
        let (state, _) = memory_state();
        let app = app!(state);

        let (status, _) = post_json!(app, "/api/auth/signup",
            json!({"username": "alice", "email": "not-an-email", "password": "secret1"}));
        assert_eq!(status, 400);

        let (status, _) = post_json!(app, "/api/auth/signup",
            json!({"username": "alice", "email": "a@x.com"}));
        assert_eq!(status, 400);
    }

    #[actix_web::test]
    async fn test_refresh_without_token_is_forbidden() {
        let (state, _) = memory_state();
        let app = app!(state);

        let (status, body) = post_json!(app, "/api/auth/refresh", json!({}));
        assert_eq!(status, 403);
        assert_eq!(body["msg"], "Refresh Token is required!");

        let (status, _) = post_json!(app, "/api/auth/refresh", json!({"requestToken": ""}));
        assert_eq!(status, 403);

        let req = test::TestRequest::post().uri("/api/auth/refresh").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn test_expired_refresh_token_over_http() {
        let (state, store) = memory_state();
        let user = state.auth_service.signup("alice", "a@x.com", "secret1").await.unwrap();
        RefreshTokenStore::create(
            store.as_ref(),
            &user.id,
            "stale-token",
            chrono::Utc::now() - chrono::Duration::days(1),
        )
        .await
        .unwrap();
        let app = app!(state);

        let (status, body) = post_json!(app, "/api/auth/refresh", json!({"requestToken": "stale-token"}));
        assert_eq!(status, 403);
        assert_eq!(body["msg"], "Refresh token was expired. Please make a new signin request");

        let (status, body) = post_json!(app, "/api/auth/refresh", json!({"requestToken": "stale-token"}));
        assert_eq!(status, 403);
        assert_eq!(body["msg"], "Refresh token is not in database!");
    }

    #[actix_web::test]
    async fn test_logout_unknown_token_succeeds() {
        let (state, _) = memory_state();
        let app = app!(state);

        let (status, _) = post_json!(app, "/api/auth/logout", json!({"requestToken": "never-issued"}));
        assert_eq!(status, 200);

        let (status, _) = post_json!(app, "/api/auth/logout", json!({}));
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_profile_requires_token() {
        let (state, _) = memory_state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/auth/profile").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status().as_u16(), 401);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["msg"], "No token, authorization denied");
    }

    #[actix_web::test]
    async fn test_profile_with_access_token() {
        let (state, store) = memory_state();
        let app = app!(state);

        post_json!(app, "/api/auth/signup",
            json!({"username": "alice", "email": "a@x.com", "password": "secret1"}));
        let (_, login) = post_json!(app, "/api/auth/login",
            json!({"email": "a@x.com", "password": "secret1"}));
        let bearer = format!("Bearer {}", login["accessToken"].as_str().unwrap());

        let req = test::TestRequest::get()
            .uri("/api/auth/profile")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 200);

        let profile: Value = test::read_body_json(res).await;
        assert_eq!(profile["id"], login["user"]["id"]);
        assert_eq!(profile["username"], "alice");
        assert!(profile.get("createdAt").is_some());
        assert!(!profile.to_string().to_lowercase().contains("password"));

        // 토큰은 유효하지만 사용자가 사라진 경우
        store.remove_user(login["user"]["id"].as_str().unwrap()).unwrap();
        let req = test::TestRequest::get()
            .uri("/api/auth/profile")
            .insert_header(("Authorization", bearer))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_google_login() {
        let (state, _) = memory_state();
        let app = app!(state);

        let (status, body) = post_json!(app, "/api/auth/google", json!({"token": "valid-google-token"}));
        assert_eq!(status, 200);
        assert_eq!(body["user"]["email"], "bob@gmail.com");
        assert!(body["accessToken"].is_string());
        assert!(body["refreshToken"].is_string());

        let (status, body) = post_json!(app, "/api/auth/google", json!({"token": "forged"}));
        assert_eq!(status, 400);
        assert_eq!(body["msg"], "Google Sign-In Failed");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let (state, _) = memory_state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert!(body["msg"].is_string());
    }
}
