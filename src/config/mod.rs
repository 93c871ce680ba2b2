//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 시작 시 한 번 읽어 [`AppConfig`]로 묶고,
//! 각 서비스와 리포지토리는 생성 시점에 필요한 설정만 주입받습니다.
//! 비즈니스 로직 안에서 환경 변수를 직접 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 파일 저장소, CORS, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3002"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="social_dev"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 업로드
//! export ASSET_DIR="public/assets"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::str::FromStr;
use crate::core::errors::AppError;

/// 프로세스 전역 설정
///
/// `main`에서 한 번 생성되어 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)를
/// 통해 각 컴포넌트에 주입됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션 환경에서 필수 값(`JWT_SECRET`)이 없는 경우
    pub fn from_env() -> Result<Self, AppError> {
        let environment = Environment::current();

        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(&environment)?,
            password: PasswordConfig::from_env(&environment),
            storage: StorageConfig::from_env(),
            cors: CorsConfig::from_env(),
            environment,
        })
    }
}

/// 환경 변수를 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}
