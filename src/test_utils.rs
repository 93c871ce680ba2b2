//! 테스트 전용 메모리 저장소와 빌더

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use actix_web::web;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, PasswordConfig, ServerConfig,
    StorageConfig,
};
use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::domain::entities::posts::post::Post;
use crate::domain::entities::users::user::{NewUser, User};
use crate::repositories::posts::PostStore;
use crate::routes::{configure_all_routes, configure_body_limits};
use crate::repositories::users::UserStore;
use crate::services::auth::{AuthService, TokenService};
use crate::services::storage::AssetStore;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// 이메일 유니크 제약을 흉내 내는 메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn count(&self) -> usize {
        self.users.lock().expect("users lock").len()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().expect("users lock");
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().expect("users lock");
        Ok(users.iter().find(|u| u.id_string().as_deref() == Some(id)).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().expect("users lock");
        Ok(users
            .iter()
            .filter(|u| u.id_string().is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().expect("users lock");
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(format!(
                "E11000 duplicate key error collection: users index: email_unique dup key: {{ email: \"{}\" }}",
                user.email
            )));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn set_friends(&self, id: &str, friends: Vec<String>) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().expect("users lock");
        Ok(users
            .iter_mut()
            .find(|u| u.id_string().as_deref() == Some(id))
            .map(|user| {
                user.friends = friends;
                user.updated_at = DateTime::now();
                user.clone()
            }))
    }
}

/// 모든 호출이 저장소 오류로 끝나는 사용자 저장소
#[derive(Default)]
pub struct FailingUserStore;

impl FailingUserStore {
    fn unavailable<T>() -> Result<T, AppError> {
        Err(AppError::DatabaseError("connection reset by peer".to_string()))
    }
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Self::unavailable()
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
        Self::unavailable()
    }

    async fn find_by_ids(&self, _ids: &[String]) -> Result<Vec<User>, AppError> {
        Self::unavailable()
    }

    async fn create(&self, _user: User) -> Result<User, AppError> {
        Self::unavailable()
    }

    async fn set_friends(&self, _id: &str, _friends: Vec<String>) -> Result<Option<User>, AppError> {
        Self::unavailable()
    }
}

/// 저장 순서를 유지하는 메모리 게시글 저장소
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.posts.lock().expect("posts lock").clone())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>, AppError> {
        let posts = self.posts.lock().expect("posts lock");
        Ok(posts.iter().filter(|p| p.user_id == user_id).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let posts = self.posts.lock().expect("posts lock");
        Ok(posts.iter().find(|p| p.id_string().as_deref() == Some(id)).cloned())
    }

    async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        post.id = Some(ObjectId::new());
        self.posts.lock().expect("posts lock").push(post.clone());
        Ok(post)
    }

    async fn set_likes(&self, id: &str, likes: HashMap<String, bool>) -> Result<Option<Post>, AppError> {
        let mut posts = self.posts.lock().expect("posts lock");
        Ok(posts
            .iter_mut()
            .find(|p| p.id_string().as_deref() == Some(id))
            .map(|post| {
                post.likes = likes;
                post.updated_at = DateTime::now();
                post.clone()
            }))
    }
}

/// 저장 요청만 기록하는 메모리 파일 저장소
#[derive(Default)]
pub struct InMemoryAssetStore {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl InMemoryAssetStore {
    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().expect("saved lock").clone()
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let name = crate::services::storage::asset_store::sanitize_file_name(file_name)
            .ok_or_else(|| AppError::ValidationError("upload file name is empty".to_string()))?;
        self.saved.lock().expect("saved lock").push((name.clone(), bytes));
        Ok(name)
    }

    fn max_upload_bytes(&self) -> usize {
        1024 * 1024
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Test,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
        },
        database: DatabaseConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database_name: "social_test".to_string(),
            operation_timeout: Duration::from_secs(5),
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiration_hours: 24,
        },
        password: PasswordConfig { bcrypt_cost: 4 },
        storage: StorageConfig {
            asset_dir: "public/assets".to_string(),
            max_upload_bytes: 1024 * 1024,
        },
        cors: CorsConfig::default(),
    }
}

pub fn test_token_service() -> TokenService {
    TokenService::new(test_config().jwt)
}

/// bcrypt cost 4, 고정 시드 난수 소스를 쓰는 인증 서비스
pub fn test_auth_service(store: Arc<InMemoryUserStore>) -> AuthService {
    let config = test_config();
    AuthService::new(
        store,
        Arc::new(TokenService::new(config.jwt)),
        config.password,
        config.database.operation_timeout,
    )
    .with_rng(StdRng::seed_from_u64(42))
}

/// 메모리 저장소로 조립한 서비스 레지스트리
pub fn test_registry(
    users: Arc<dyn UserStore>,
    posts: Arc<dyn PostStore>,
    assets: Arc<dyn AssetStore>,
) -> ServiceRegistry {
    ServiceRegistry::new(&test_config(), users, posts, assets)
}

/// 해싱 없이 사용자를 바로 저장하고 ID를 반환합니다.
pub async fn seed_user(store: &InMemoryUserStore, email: &str) -> String {
    let name = email.split('@').next().unwrap_or("user").to_string();
    let user = User::new_local(
        NewUser {
            first_name: name.clone(),
            last_name: name,
            email: email.to_string(),
            ..Default::default()
        },
        "$2b$04$seededhashseededhashseededhashseededhashseededhas".to_string(),
        &mut StdRng::seed_from_u64(1),
    );

    store
        .create(user)
        .await
        .expect("seed user")
        .id_string()
        .expect("seeded id")
}

/// 레지스트리 등록 + 본문 제한 + 전체 라우트를 한 번에 구성합니다.
pub fn configure_test_app(registry: ServiceRegistry) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        registry.register(cfg);
        configure_body_limits(cfg);
        configure_all_routes(cfg);
    }
}

/// 테스트 비밀키로 서명한 `Authorization` 헤더
pub fn bearer(user_id: &str) -> (&'static str, String) {
    let token = test_token_service().sign(user_id).expect("sign test token");
    ("Authorization", format!("Bearer {}", token))
}

/// `multipart/form-data` 본문을 만듭니다. `(content-type, body)`를 반환합니다.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> (String, Vec<u8>) {
    const BOUNDARY: &str = "----social-backend-test-boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((name, file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
