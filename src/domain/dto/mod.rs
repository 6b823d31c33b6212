//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문과 도메인 모델 사이의 변환을 담당합니다.
//! 모든 JSON 필드명은 프론트엔드 계약에 맞춰 camelCase를 사용합니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |------------|------|------|
//! | `POST /signup` | [`SignupRequest`](users::request::SignupRequest) | [`MessageResponse`](tokens::MessageResponse) |
//! | `POST /login` | [`LoginRequest`](users::request::LoginRequest) | [`LoginResponse`](users::response::LoginResponse) |
//! | `POST /refresh` | [`TokenRequest`](tokens::TokenRequest) | [`TokenPair`](crate::domain::models::token::TokenPair) |
//! | `POST /logout` | [`TokenRequest`](tokens::TokenRequest) | [`MessageResponse`](tokens::MessageResponse) |
//! | `GET /profile` | - | [`ProfileResponse`](users::response::ProfileResponse) |
//! | `POST /google` | [`GoogleLoginRequest`](users::request::GoogleLoginRequest) | [`LoginResponse`](users::response::LoginResponse) |

pub mod users;
pub mod tokens;
