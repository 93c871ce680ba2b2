//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_repo::UserStore) 트레이트와 MongoDB 구현
//! [`UserRepository`](user_repo::UserRepository)를 제공합니다.

pub mod user_repo;

pub use user_repo::{UserRepository, UserStore};
