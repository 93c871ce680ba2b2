//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 `async_trait` 트레이트(`UserStore`, `PostStore`)로 정의되고,
//! MongoDB 구현(`UserRepository`, `PostRepository`)이 이를 구현합니다.
//! 서비스는 트레이트 객체만 알기 때문에 테스트에서는 메모리 구현으로 대체됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_backend::repositories::users::user_repo::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(&database);
//! user_repo.create_indexes().await?;
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod posts;

use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use crate::core::errors::AppError;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 16진수 문자열을 ObjectId로 변환합니다. 형식이 맞지 않으면 `None`.
pub(crate) fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

pub(crate) fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 드라이버 에러를 `AppError`로 변환합니다.
pub(crate) fn map_mongo_error(err: MongoError) -> AppError {
    if is_duplicate_key(&err) {
        AppError::ConflictError(err.to_string())
    } else {
        AppError::DatabaseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()), Some(id));
        assert_eq!(parse_object_id("not-an-id"), None);
        assert_eq!(parse_object_id(""), None);
    }
}
