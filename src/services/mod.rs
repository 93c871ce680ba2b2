//! # Services Layer
//!
//! 비즈니스 로직 계층입니다. 모든 서비스는 생성자에서 저장소 트레이트 객체와
//! 설정값을 주입받으며, 전역 상태나 환경 변수를 직접 읽지 않습니다.
//!
//! - [`auth`] - 회원가입, 로그인, 토큰 서명/검증, 비밀번호 해싱
//! - [`users`] - 사용자 조회, 친구 목록 관리
//! - [`posts`] - 게시글 작성, 피드, 좋아요
//! - [`storage`] - 업로드 파일 저장소

pub mod auth;
pub mod users;
pub mod posts;
pub mod storage;

use std::future::Future;
use std::time::Duration;
use actix_web::rt::time::timeout;
use crate::core::errors::AppError;

/// 저장소 호출에 시간 제한을 겁니다.
///
/// 제한 시간을 넘기면 `AppError::DatabaseError`를 반환합니다.
pub(crate) async fn with_store_timeout<T, F>(limit: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    timeout(limit, operation)
        .await
        .map_err(|_| AppError::DatabaseError(format!("store operation timed out after {:?}", limit)))?
}
