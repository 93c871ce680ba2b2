//! # Service Registry
//!
//! 시작 시 한 번 모든 서비스를 조립하고, 워커마다 `web::Data`로 등록합니다.
//!
//! 서비스는 전역 상태 없이 생성자에서 의존성을 주입받습니다.
//! 저장소는 `Arc<dyn UserStore>` 같은 트레이트 객체로 주입되므로
//! 테스트에서는 MongoDB 대신 메모리 구현을 그대로 끼워 넣을 수 있습니다.
//!
//! ```text
//! AppConfig + Database
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ ServiceRegistry  │ ← 서비스 인스턴스 보관 (Arc)
//! └──────────────────┘
//!        │ register(cfg)
//!        ▼
//!   web::Data<AuthService>, web::Data<TokenService>,
//!   web::Data<UserService>, web::Data<PostService>,
//!   web::Data<dyn AssetStore>
//! ```

use std::sync::Arc;
use actix_web::web;
use log::info;
use crate::config::AppConfig;
use crate::core::errors::AppError;
use crate::db::Database;
use crate::repositories::posts::post_repo::{PostRepository, PostStore};
use crate::repositories::users::user_repo::{UserRepository, UserStore};
use crate::services::auth::{AuthService, TokenService};
use crate::services::posts::PostService;
use crate::services::storage::{AssetStore, LocalAssetStore};
use crate::services::users::UserService;

/// 조립된 서비스 묶음
///
/// `Clone`은 내부 `web::Data`(= `Arc`) 복제만 수행합니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    pub auth_service: web::Data<AuthService>,
    pub token_service: web::Data<TokenService>,
    pub user_service: web::Data<UserService>,
    pub post_service: web::Data<PostService>,
    pub asset_store: web::Data<dyn AssetStore>,
}

impl ServiceRegistry {
    /// 주어진 저장소 구현으로 모든 서비스를 생성합니다.
    pub fn new(
        config: &AppConfig,
        user_store: Arc<dyn UserStore>,
        post_store: Arc<dyn PostStore>,
        asset_store: Arc<dyn AssetStore>,
    ) -> Self {
        let timeout = config.database.operation_timeout;
        let token_service = Arc::new(TokenService::new(config.jwt.clone()));

        let auth_service = AuthService::new(
            user_store.clone(),
            token_service.clone(),
            config.password.clone(),
            timeout,
        );
        let user_service = UserService::new(user_store.clone(), timeout);
        let post_service = PostService::new(post_store, user_store, timeout);

        Self {
            auth_service: web::Data::new(auth_service),
            token_service: web::Data::from(token_service),
            user_service: web::Data::new(user_service),
            post_service: web::Data::new(post_service),
            asset_store: web::Data::from(asset_store),
        }
    }

    /// MongoDB 리포지토리와 로컬 파일 저장소로 서비스를 조립합니다.
    ///
    /// 컬렉션 인덱스 생성과 업로드 디렉터리 준비도 여기서 수행합니다.
    pub async fn with_mongo(config: &AppConfig, database: &Database) -> Result<Self, AppError> {
        let user_repo = UserRepository::new(database);
        user_repo.create_indexes().await?;

        let post_repo = PostRepository::new(database);
        post_repo.create_indexes().await?;

        let asset_store = LocalAssetStore::new(&config.storage);
        asset_store.ensure_dir().await?;

        info!("📦 서비스 레지스트리 초기화 완료");

        Ok(Self::new(
            config,
            Arc::new(user_repo),
            Arc::new(post_repo),
            Arc::new(asset_store),
        ))
    }

    /// 모든 서비스를 `App` 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.auth_service.clone())
            .app_data(self.token_service.clone())
            .app_data(self.user_service.clone())
            .app_data(self.post_service.clone())
            .app_data(self.asset_store.clone());
    }
}
