//! bcrypt 패스워드 해싱
//!
//! bcrypt는 CPU 바운드 작업이므로 항상 블로킹 스레드 풀에서 실행합니다.
//! 비동기 워커 스레드에서 직접 호출하지 않습니다.

use actix_web::rt::task::spawn_blocking;
use crate::core::errors::{AppError, ErrorContext};

/// 새 솔트로 비밀번호를 해싱합니다. 결과는 `$2b$` 형식입니다.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("비밀번호 해싱 작업 실패")?
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .context("비밀번호 검증 작업 실패")?
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}
