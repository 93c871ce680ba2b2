//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 파일 저장소, CORS 및 패스워드 해싱 관련 설정을 관리합니다.
//! 모든 값은 시작 시 한 번 읽혀 [`AppConfig`](super::AppConfig)에 담깁니다.

use std::time::Duration;
use super::env_or;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = std::env::var("ENVIRONMENT")
            .or_else(|_| std::env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST` 환경 변수 또는 실행 환경 기본값으로 설정을 만듭니다.
    ///
    /// 범위를 벗어난 값은 무시하고 환경 기본값을 사용합니다.
    pub fn from_env(env: &Environment) -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// `HOST`(기본값 "0.0.0.0"), `PORT`(기본값 3002), `SERVER_WORKERS`(기본값 4)
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3002),
            workers: env_or("SERVER_WORKERS", 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// 저장소 호출 한 번에 허용하는 최대 시간
    pub operation_timeout: Duration,
}

impl DatabaseConfig {
    /// ## 환경 변수
    /// - `MONGODB_URI` (또는 `MONGO_URL`): 기본값 "mongodb://localhost:27017"
    /// - `DATABASE_NAME`: 기본값 "social_dev"
    /// - `DB_OPERATION_TIMEOUT_SECS`: 기본값 10
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI")
            .or_else(|_| std::env::var("MONGO_URL"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        Self {
            uri,
            database_name: env_or("DATABASE_NAME", "social_dev".to_string()),
            operation_timeout: Duration::from_secs(env_or("DB_OPERATION_TIMEOUT_SECS", 10)),
        }
    }
}

/// 업로드 파일 저장소 설정
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// 업로드 파일이 저장되고 `/assets`로 서빙되는 디렉터리
    pub asset_dir: String,
    /// 업로드 파일 하나의 최대 크기 (바이트)
    pub max_upload_bytes: usize,
}

impl StorageConfig {
    /// `ASSET_DIR`(기본값 "public/assets"), `MAX_UPLOAD_BYTES`(기본값 30MiB)
    pub fn from_env() -> Self {
        Self {
            asset_dir: env_or("ASSET_DIR", "public/assets".to_string()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 30 * 1024 * 1024),
        }
    }
}

/// CORS 설정
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// 허용할 Origin 목록. 비어 있으면 모든 Origin을 허용합니다.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)
    pub fn from_env() -> Self {
        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| Self::parse_origins(&v))
            .unwrap_or_default();

        Self { allowed_origins }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
