//! # 게시글 리포지토리 구현
//!
//! MongoDB `posts` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 목록 조회는 저장 순서(`_id` 오름차순)를 따릅니다.

use std::collections::HashMap;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::posts::post::Post,
};
use crate::repositories::{map_mongo_error, parse_object_id};

/// 게시글 저장소 포트
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Post>, AppError>;

    /// 특정 작성자의 게시글 목록
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError>;

    async fn create(&self, post: Post) -> Result<Post, AppError>;

    /// 좋아요 맵을 통째로 교체합니다. 게시글이 없으면 `Ok(None)`.
    async fn set_likes(&self, id: &str, likes: HashMap<String, bool>) -> Result<Option<Post>, AppError>;
}

/// MongoDB `posts` 컬렉션 리포지토리
pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    pub const COLLECTION_NAME: &'static str = "posts";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Post>(Self::COLLECTION_NAME),
        }
    }

    /// 작성자별 조회를 위한 `userId` 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection
            .create_index(user_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Post>, AppError> {
        self.collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        self.find_many(doc! {}).await
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>, AppError> {
        self.find_many(doc! { "userId": user_id }).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self.collection
            .insert_one(&post)
            .await
            .map_err(map_mongo_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted _id is not an ObjectId".to_string())
        })?;
        post.id = Some(id);

        Ok(post)
    }

    async fn set_likes(&self, id: &str, likes: HashMap<String, bool>) -> Result<Option<Post>, AppError> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        let likes = to_bson(&likes).map_err(|e| AppError::DatabaseError(e.to_string()))?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "likes": likes, "updatedAt": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
