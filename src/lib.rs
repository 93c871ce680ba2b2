//! 소셜 네트워크 백엔드
//!
//! 회원가입/로그인, 사용자 프로필과 친구 관계, 게시글 피드와 좋아요를 제공하는
//! REST API 서비스입니다.
//!
//! # Features
//!
//! - **로컬 인증**: bcrypt 비밀번호 해싱, HS256 JWT 발급/검증
//! - **사용자**: 프로필 조회, 친구 목록, 친구 추가/해제 토글
//! - **게시글**: 작성, 전체/사용자별 피드, 좋아요 토글
//! - **업로드**: 프로필/게시글 이미지를 로컬 디렉터리에 저장하고 `/assets`로 제공
//! - **MongoDB**: 사용자/게시글 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth, /users, /posts, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Middlewares    │ ← Bearer 토큰 검증, 보안 헤더
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, multipart 파싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / PostStore / AssetStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Disk  │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_backend::core::registry::ServiceRegistry;
//! use social_backend::routes::{configure_all_routes, configure_body_limits};
//!
//! let registry = ServiceRegistry::with_mongo(&config, &database).await?;
//! let app = App::new()
//!     .configure(|cfg| registry.register(cfg))
//!     .configure(configure_body_limits)
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub mod test_utils;
