//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별 스코프로 묶어 등록합니다.
//!
//! | 스코프 | 인증 | 엔드포인트 |
//! |--------|------|-----------|
//! | `/health` | - | 헬스체크 |
//! | `/auth` | - | `register`, `login` |
//! | `/users` | Bearer | `get_user`, `get_user_friends`, `add_remove_friend` |
//! | `/posts` | Bearer | `create_post`, `get_feed_posts`, `get_user_posts`, `like_post` |
//!
//! 업로드된 파일은 `main`에서 `/assets` 정적 경로로 따로 노출합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| registry.register(cfg))
//!     .configure(configure_body_limits)
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// JSON/multipart 본문 최대 크기 (30 MiB)
pub const MAX_BODY_BYTES: usize = 30 * 1024 * 1024;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_post_routes(cfg);
}

/// 요청 본문 크기 제한을 등록합니다.
///
/// `Either<Json, Multipart>` 추출기는 본문을 먼저 버퍼링하므로
/// `PayloadConfig`도 함께 올려야 이미지 업로드가 잘리지 않습니다.
pub fn configure_body_limits(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(MAX_BODY_BYTES))
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES));
}

/// 인증 라우트 (Public)
///
/// ```bash
/// curl -X POST http://localhost:3001/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ada@example.com","password":"secret"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login),
    );
}

/// 사용자 라우트 (Bearer 토큰 필요)
///
/// `/{id}/friends`가 `/{id}/{friend_id}`보다 먼저 등록되어야 GET이 올바르게 매칭됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_user_friends)
            .service(handlers::users::get_user)
            .service(handlers::users::add_remove_friend),
    );
}

/// 게시글 라우트 (Bearer 토큰 필요)
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .wrap(AuthMiddleware::required())
            .service(handlers::posts::create_post)
            .service(handlers::posts::get_feed_posts)
            .service(handlers::posts::get_user_posts)
            .service(handlers::posts::like_post),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check_needs_no_token() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "social_backend");
        assert!(body["timestamp"].as_str().is_some());
    }
}
