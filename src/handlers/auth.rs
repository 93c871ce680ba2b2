//! # Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/auth/register` | 201 `{status, data}` | 500 `{message}` |
//! | `POST` | `/auth/login` | 200 `{token, user}` | 400 `{msg}` / 500 `{error}` |
//!
//! 회원가입은 JSON 본문과 `multipart/form-data`(프로필 이미지 `picture` 포함)를 모두 받습니다.

use actix_multipart::Multipart;
use actix_web::{http::StatusCode, post, web, Either, HttpResponse};
use serde_json::json;
use crate::{
    core::errors::AppError,
    domain::dto::users::{
        request::{LoginRequest, RegisterRequest},
        response::RegisterResponse,
    },
    domain::entities::users::user::User,
    services::{auth::AuthService, storage::AssetStore},
};
use super::form::{read_multipart, resolve_picture_path, MultipartForm};
use super::message_response;

/// 회원가입
///
/// # Request (JSON)
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "email": "ada@example.com",
///   "password": "secret",
///   "location": "London",
///   "occupation": "Mathematician"
/// }
/// ```
///
/// multipart 요청이면 같은 이름의 텍스트 필드와 선택적 `picture` 파일을 보냅니다.
/// 파일이 있으면 저장 후 그 파일명이 `picturePath`가 됩니다.
///
/// # Errors
///
/// 중복 이메일, 길이 제약 위반, 저장소 오류 등 모든 실패는 500 `{message}`입니다.
#[post("/register")]
pub async fn register(
    auth_service: web::Data<AuthService>,
    asset_store: web::Data<dyn AssetStore>,
    body: Either<web::Json<RegisterRequest>, Multipart>,
) -> HttpResponse {
    let result: Result<User, AppError> = async {
        let request = match body {
            Either::Left(json) => json.into_inner(),
            Either::Right(payload) => {
                let mut form = read_multipart(payload, asset_store.max_upload_bytes()).await?;
                let picture_path = resolve_picture_path(&mut form, asset_store.get_ref()).await?;
                register_request_from_form(form, picture_path)
            }
        };

        auth_service.register(request).await
    }
    .await;

    match result {
        Ok(user) => HttpResponse::Created().json(RegisterResponse::success(user)),
        Err(e) => {
            log::error!("회원가입 실패: {}", e);
            message_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}

/// 로그인
///
/// 이메일이 없거나 비밀번호가 틀리면 400 `{msg}`, 그 외 실패는 500 `{error}`입니다.
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> HttpResponse {
    let email = payload.email.clone();

    match auth_service.login(payload.into_inner()).await {
        Ok(response) => {
            log::info!("로그인 성공: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(AppError::NotFound(msg)) | Err(AppError::AuthenticationError(msg)) => {
            log::info!("로그인 거부: {} ({})", email, msg);
            HttpResponse::BadRequest().json(json!({ "msg": msg }))
        }
        Err(e) => {
            log::error!("로그인 처리 실패: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}

fn register_request_from_form(mut form: MultipartForm, picture_path: Option<String>) -> RegisterRequest {
    let friends = form
        .take("friends")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    RegisterRequest {
        first_name: form.take("firstName").unwrap_or_default(),
        last_name: form.take("lastName").unwrap_or_default(),
        email: form.take("email").unwrap_or_default(),
        password: form.take("password").unwrap_or_default(),
        picture_path,
        friends,
        location: form.take("location"),
        occupation: form.take("occupation"),
    }
}
