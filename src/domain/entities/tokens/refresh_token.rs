//! Refresh Token Entity
//!
//! 서버 측에서 폐기할 수 있는 장기 세션 자격 증명입니다.

use chrono::{DateTime, Duration, Utc};

/// 저장소 레코드의 고정 수명 (발급 시점 + 7일)
pub const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 7;

/// 리프레시 토큰 레코드
///
/// 토큰 문자열은 최대 하나의 레코드만 식별합니다. 만료는 사용 시점에만 검사하며
/// 주기적인 정리 작업은 없습니다. 레코드는 수정되지 않고 생성과 삭제만 일어납니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken {
    pub id: String,
    pub token: String,
    pub user_id: String,
    pub expiry_date: DateTime<Utc>,
}

impl RefreshToken {
    /// 새 레코드의 만료 시각을 계산합니다.
    pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::days(REFRESH_TOKEN_LIFETIME_DAYS)
    }

    /// `expiry_date < now` 이면 만료된 것으로 봅니다.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
