//! # Domain Entities
//!
//! MongoDB에 저장되는 도메인 엔티티입니다.
//!
//! - [`users`] - 사용자 (`users` 컬렉션)
//! - [`posts`] - 게시글 (`posts` 컬렉션)

pub mod users;
pub mod posts;
