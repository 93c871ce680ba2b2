//! 인증 서비스 모듈
//!
//! - [`auth_service`] - 회원가입/로그인 흐름
//! - [`token_service`] - JWT 서명/검증
//! - [`password`] - bcrypt 해싱 (블로킹 풀에서 실행)

pub mod auth_service;
pub mod token_service;
pub mod password;

pub use auth_service::AuthService;
pub use token_service::TokenService;
