//! # User HTTP Handlers
//!
//! 인증된 요청만 도달합니다 (`AuthMiddleware`).
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/users/{id}` | 사용자 조회 |
//! | `GET` | `/users/{id}/friends` | 친구 목록 |
//! | `PATCH` | `/users/{id}/{friendId}` | 친구 추가/해제 토글 |
//!
//! 모든 실패는 404 `{message}`로 응답합니다.

use actix_web::{get, http::StatusCode, patch, web, HttpResponse};
use crate::domain::auth::AuthenticatedUser;
use crate::services::users::UserService;
use super::message_response;

#[get("/{id}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> HttpResponse {
    match user_service.get_user(&path).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => message_response(StatusCode::NOT_FOUND, &e),
    }
}

#[get("/{id}/friends")]
pub async fn get_user_friends(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> HttpResponse {
    match user_service.get_user_friends(&path).await {
        Ok(friends) => HttpResponse::Ok().json(friends),
        Err(e) => message_response(StatusCode::NOT_FOUND, &e),
    }
}

/// 친구 관계 토글 후 `{id}` 사용자의 친구 목록을 반환합니다.
#[patch("/{id}/{friend_id}")]
pub async fn add_remove_friend(
    caller: AuthenticatedUser,
    user_service: web::Data<UserService>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (id, friend_id) = path.into_inner();
    log::debug!("친구 토글 요청: {} → {} (요청자 {})", id, friend_id, caller.user_id);

    match user_service.add_remove_friend(&id, &friend_id).await {
        Ok(friends) => HttpResponse::Ok().json(friends),
        Err(e) => {
            log::warn!("친구 토글 실패 {} → {}: {}", id, friend_id, e);
            message_response(StatusCode::NOT_FOUND, &e)
        }
    }
}
