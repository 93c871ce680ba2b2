//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `Authorization` 헤더의 JWT 검증 (`Bearer ` 접두사는 선택)
//! - 사용자 정보를 request extension에 저장
//!
//! ### 2. 보안 헤더 (security_headers)
//! - nosniff, frame options, referrer policy, cross-origin resource policy
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(security_headers())
//!     .service(
//!         web::scope("/posts")
//!             .wrap(AuthMiddleware::required())
//!             .service(handlers::posts::get_feed_posts)
//!     )
//! ```

pub mod auth_middleware;
pub mod security_headers;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use security_headers::security_headers;
