//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 본문을 DTO로 바꿔 서비스에 넘기고, 결과를 엔드포인트별 응답 형태로 변환합니다.
//!
//! ```text
//! Client ──▶ Handlers (이 모듈) ──▶ Services ──▶ Repositories ──▶ MongoDB
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: `POST /auth/register`, `POST /auth/login`
//! - **`users`**: `GET /users/{id}`, `GET /users/{id}/friends`, `PATCH /users/{id}/{friendId}`
//! - **`posts`**: `POST /posts`, `GET /posts`, `GET /posts/{userId}/posts`, `PATCH /posts/{id}/like`
//! - **`form`**: `multipart/form-data` 본문 읽기 (회원가입/게시글 작성의 이미지 업로드)
//!
//! ## 에러 응답 형태
//!
//! 기존 클라이언트와의 호환을 위해 엔드포인트마다 본문 키가 다릅니다.
//!
//! | 엔드포인트 | 실패 응답 |
//! |------------|-----------|
//! | 회원가입 | 500 `{"message"}` |
//! | 로그인 | 400 `{"msg"}` / 500 `{"error"}` |
//! | 사용자 | 404 `{"message"}` |
//! | 게시글 작성 | 409 `{"message"}` |
//! | 게시글 조회/좋아요 | 404 `{"message"}` |

pub mod auth;
pub mod users;
pub mod posts;
pub mod form;

use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;

/// `{"message": "..."}` 형태의 실패 응답
pub(crate) fn message_response(status: StatusCode, err: &AppError) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "message": err.to_string() }))
}
