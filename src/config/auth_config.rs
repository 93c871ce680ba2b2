//! # Authentication Configuration Module
//!
//! JWT 서명 설정을 관리합니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use super::{Environment, env_or};
use crate::core::errors::AppError;

/// 개발/테스트 환경에서만 허용되는 기본 서명 키
const DEV_JWT_SECRET: &str = "dev-only-jwt-secret";

pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

/// 토큰 수명 상한 (1년)
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// JWT 토큰 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC 서명 비밀키 (프로세스 전역)
    pub secret: String,
    /// 토큰 만료 시간 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽습니다.
    ///
    /// `JWT_SECRET`이 없으면 프로덕션/스테이징에서는 에러를 반환하고,
    /// 그 외 환경에서는 경고 로그와 함께 개발용 기본 키를 사용합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn from_env(env: &Environment) -> Result<Self, AppError> {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => match env {
                Environment::Production | Environment::Staging => {
                    return Err(AppError::InternalError(
                        "JWT_SECRET 환경 변수가 설정되지 않았습니다".to_string(),
                    ));
                }
                _ => {
                    log::warn!("JWT_SECRET not set, using development default (not secure for production!)");
                    DEV_JWT_SECRET.to_string()
                }
            },
        };

        Ok(Self {
            secret,
            expiration_hours: Self::expiration_hours_or_default(env_or(
                "JWT_EXPIRATION_HOURS",
                DEFAULT_EXPIRATION_HOURS,
            )),
        })
    }

    /// `1..=MAX_EXPIRATION_HOURS` 밖의 값은 기본값(24시간)으로 대체합니다.
    pub fn expiration_hours_or_default(hours: i64) -> i64 {
        if (1..=MAX_EXPIRATION_HOURS).contains(&hours) {
            hours
        } else {
            log::warn!(
                "JWT_EXPIRATION_HOURS={} 는 허용 범위(1-{}) 밖입니다. 기본값 {} 사용",
                hours, MAX_EXPIRATION_HOURS, DEFAULT_EXPIRATION_HOURS
            );
            DEFAULT_EXPIRATION_HOURS
        }
    }
}
