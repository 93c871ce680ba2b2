//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`](crate::config::DatabaseConfig)로 주입받습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use social_backend::config::AppConfig;
//! use social_backend::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::new(&config.database).await?;
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::config::DatabaseConfig;
use crate::core::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 리포지토리 계층에서 컬렉션 핸들을 얻는 진입점입니다.
/// `Client`는 내부적으로 커넥션 풀을 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 만들고 `ping`으로 연결 상태를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패, 클라이언트 생성 실패, ping 실패
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.server_selection_timeout = Some(config.operation_timeout);

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 설정된 이름의 `mongodb::Database` 핸들을 반환합니다.
    ///
    /// ```rust,ignore
    /// let users = database.get_database().collection::<User>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
