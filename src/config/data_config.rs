//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소 백엔드, 서버 바인딩, 비밀번호 해싱, Rate Limiting 설정을 관리합니다.

use std::env;

/// 저장소 포트 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB 문서 저장소
    MongoDb,
    /// MySQL 관계형 저장소
    MySql,
    /// 프로세스 메모리 (테스트/로컬 실험용)
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Some(StorageBackend::MongoDb),
            "mysql" => Some(StorageBackend::MySql),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::MySql => "mysql",
            StorageBackend::Memory => "memory",
        }
    }
}

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// `DATABASE_BACKEND` 환경 변수로 저장소 구현을 선택합니다 (기본값: mongodb).
    pub fn backend() -> StorageBackend {
        let raw = env::var("DATABASE_BACKEND").unwrap_or_else(|_| "mongodb".to_string());

        StorageBackend::from_str(&raw).unwrap_or_else(|| {
            log::warn!("알 수 없는 DATABASE_BACKEND '{}', mongodb 사용", raw);
            StorageBackend::MongoDb
        })
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "credential_auth".to_string())
    }

    pub fn mysql_url() -> String {
        env::var("MYSQL_URL")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/credential_auth".to_string())
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 기본 bcrypt cost
    pub const DEFAULT_COST: u32 = 10;

    /// bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-31 범위의 정수가 아니면 기본값 10을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|raw| Self::parse_cost(&raw))
            .unwrap_or(Self::DEFAULT_COST)
    }

    pub fn parse_cost(raw: &str) -> Option<u32> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=31).contains(cost))
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 허용할 단일 CORS Origin. 설정되지 않으면 모든 Origin을 허용합니다.
    pub fn cors_allowed_origin() -> Option<String> {
        env::var("CORS_ALLOWED_ORIGIN").ok().filter(|o| !o.trim().is_empty())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub seconds_per_request: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_SECONDS_PER_REQUEST` - 토큰 보충 간격 (기본값: 9초)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 100)
    ///
    /// 기본값은 IP당 15분에 약 100요청입니다.
    pub fn from_env() -> Self {
        let seconds_per_request = env::var("RATE_LIMIT_SECONDS_PER_REQUEST")
            .unwrap_or_else(|_| "9".to_string())
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::error!("RATE_LIMIT_SECONDS_PER_REQUEST 파싱 실패. 기본값 9 사용");
                9
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .unwrap_or_else(|| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패. 기본값 100 사용");
                100
            });

        let config = Self {
            seconds_per_request,
            burst_size,
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
