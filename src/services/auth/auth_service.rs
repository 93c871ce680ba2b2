//! # 인증 서비스
//!
//! 로컬 계정의 회원가입과 로그인을 담당합니다.
//!
//! ## 회원가입 흐름
//!
//! ```text
//! RegisterRequest
//!   ├─ 1. 스키마 제약 검증 (validator)
//!   ├─ 2. bcrypt 해싱 (블로킹 풀, 설정된 cost)
//!   ├─ 3. 프로필 카운터 추첨 (주입된 난수 소스, [0, 1000))
//!   └─ 4. 저장 (이메일 유니크 인덱스가 중복을 차단)
//! ```
//!
//! ## 로그인 흐름
//!
//! ```text
//! LoginRequest
//!   ├─ 1. 이메일 정확히 일치 조회 → 없으면 "User does not exist"
//!   ├─ 2. bcrypt 검증            → 불일치면 "Password is wrong"
//!   └─ 3. 토큰 발급 + 허용 목록 사용자 응답
//! ```
//!
//! 서버 측 세션 상태는 없습니다.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use validator::Validate;
use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest},
            response::{LoginResponse, UserResponse},
        },
        entities::users::user::User,
    },
    repositories::users::UserStore,
    services::with_store_timeout,
};
use super::password::{hash_password, verify_password};
use super::token_service::TokenService;

pub const USER_NOT_FOUND_MESSAGE: &str = "User does not exist";
pub const WRONG_PASSWORD_MESSAGE: &str = "Password is wrong";

/// 회원가입/로그인 서비스
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
    password: PasswordConfig,
    /// 프로필 카운터용 난수 소스
    rng: Mutex<StdRng>,
    store_timeout: Duration,
}

impl AuthService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        password: PasswordConfig,
        store_timeout: Duration,
    ) -> Self {
        Self {
            user_store,
            token_service,
            password,
            rng: Mutex::new(StdRng::from_entropy()),
            store_timeout,
        }
    }

    /// 난수 소스를 교체합니다. 같은 시드면 같은 카운터가 나옵니다.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    /// 새 로컬 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름/이메일/비밀번호 길이 제약 위반
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    /// * `AppError::DatabaseError` - 저장소 오류 또는 시간 초과
    /// * `AppError::InternalError` - 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let (profile, password) = request.into_parts();
        let password_hash = hash_password(password, self.password.bcrypt_cost).await?;

        let user = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            User::new_local(profile, password_hash, &mut *rng)
        };

        let created = with_store_timeout(self.store_timeout, self.user_store.create(user)).await?;

        info!("👤 새 사용자 등록: {}", created.id_string().unwrap_or_default());
        Ok(created)
    }

    /// 이메일/비밀번호로 로그인하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이메일의 사용자 없음 (`"User does not exist"`)
    /// * `AppError::AuthenticationError` - 비밀번호 불일치 (`"Password is wrong"`)
    /// * 그 외 - 저장소 오류, 검증 실패, 토큰 서명 실패
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = with_store_timeout(self.store_timeout, self.user_store.find_by_email(&request.email))
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        let is_valid = verify_password(request.password, user.password_hash.clone()).await?;
        if !is_valid {
            debug!("비밀번호 불일치: {}", request.email);
            return Err(AppError::AuthenticationError(WRONG_PASSWORD_MESSAGE.to_string()));
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
        let token = self.token_service.sign(&user_id)?;

        debug!("로그인 성공: {}", user_id);
        Ok(LoginResponse {
            token,
            user: UserResponse::from(&user),
        })
    }
}
