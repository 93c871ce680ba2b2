//! # Domain Layer Module
//!
//! 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 객체 (User, Post)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 저장되지 않는 모델 (토큰 클레임, 인증 사용자)
//!      │
//!      ▼
//! Services → Repositories → MongoDB
//! ```
//!
//! 엔티티는 절대 HTTP 응답으로 직접 직렬화하지 않습니다.
//! 응답은 항상 [`dto`]의 허용 목록 구조체를 통해 만들어집니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::auth;
