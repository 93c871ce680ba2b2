//! 저장되지 않는 도메인 모델
//!
//! - [`token`] - JWT 클레임
//! - [`auth`] - 미들웨어가 요청에 붙이는 인증 사용자 정보

pub mod auth;
pub mod token;
