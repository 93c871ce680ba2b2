//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **트레이트 경계**: 서비스는 [`UserStore`]에만 의존
//! - **데이터 무결성**: 이메일 유니크 인덱스로 중복 가입을 저장소 수준에서 차단
//! - **잘못된 ID**: ObjectId 형식이 아닌 ID는 "없음"(`Ok(None)`)으로 취급

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::users::user::User,
};
use crate::repositories::{map_mongo_error, parse_object_id};

/// 사용자 저장소 포트
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일 정확히 일치 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 여러 ID를 한 번에 조회합니다. 존재하지 않는 ID는 결과에서 빠집니다.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 중복
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 친구 목록을 통째로 교체합니다. 사용자가 없으면 `Ok(None)`.
    async fn set_friends(&self, id: &str, friends: Vec<String>) -> Result<Option<User>, AppError>;
}

/// MongoDB `users` 컬렉션 리포지토리
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 유니크 인덱스** (`email_unique`): 동시 가입 경쟁에서도 한 건만 성공
    /// 2. **생성일 인덱스** (`created_at_desc`)
    ///
    /// 이미 중복 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        let object_ids: Vec<_> = ids.iter().filter_map(|id| parse_object_id(id)).collect();
        if object_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection
            .find(doc! { "_id": { "$in": object_ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(map_mongo_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted _id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn set_friends(&self, id: &str, friends: Vec<String>) -> Result<Option<User>, AppError> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "friends": friends, "updatedAt": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
