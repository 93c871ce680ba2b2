//! 인증된 사용자 정보
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰 검증에 성공하면
//! Request Extensions에 저장하고, 핸들러는 추출자로 꺼내 씁니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// 토큰의 `id` 클레임 (사용자 ObjectId 16진수 문자열)
    pub user_id: String,
}

/// 핸들러 파라미터로 인증 사용자 정보를 받을 수 있게 합니다.
///
/// ```rust,ignore
/// #[get("/{id}")]
/// async fn get_user(user: AuthenticatedUser) -> impl Responder { ... }
/// ```
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized("Unauthenticated request"))),
        }
    }
}
