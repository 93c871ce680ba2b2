//! # Data Transfer Objects
//!
//! HTTP 요청 본문과 응답 본문의 형태를 정의합니다.
//! 요청 DTO는 `validator`로 검증하고, 응답 DTO는 엔티티에서 허용된 필드만 복사합니다.
//!
//! - [`users`] - 회원가입, 로그인, 사용자/친구 응답
//! - [`posts`] - 게시글 작성, 좋아요, 게시글 응답

pub mod users;
pub mod posts;
