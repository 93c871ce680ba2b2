//! # 게시글 서비스
//!
//! 게시글 작성, 피드/작성자별 조회, 좋아요 토글을 담당합니다.
//! 게시글에는 작성 시점의 작성자 이름/위치/프로필 이미지가 복사됩니다.

use std::sync::Arc;
use std::time::Duration;
use log::debug;
use crate::{
    core::errors::AppError,
    domain::{
        dto::posts::{CreatePostRequest, PostResponse},
        entities::posts::post::Post,
    },
    repositories::{posts::PostStore, users::UserStore},
    services::with_store_timeout,
};

pub struct PostService {
    post_store: Arc<dyn PostStore>,
    user_store: Arc<dyn UserStore>,
    store_timeout: Duration,
}

impl PostService {
    pub fn new(post_store: Arc<dyn PostStore>, user_store: Arc<dyn UserStore>, store_timeout: Duration) -> Self {
        Self {
            post_store,
            user_store,
            store_timeout,
        }
    }

    /// 게시글을 작성하고 전체 게시글 목록을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 작성자가 없는 경우
    pub async fn create_post(&self, request: CreatePostRequest) -> Result<Vec<PostResponse>, AppError> {
        let author = with_store_timeout(self.store_timeout, self.user_store.find_by_id(&request.user_id))
            .await?
            .ok_or_else(|| AppError::NotFound("Post author not found".to_string()))?;

        let post = Post::new_by(&author, request.description, request.picture_path);
        let created = with_store_timeout(self.store_timeout, self.post_store.create(post)).await?;
        debug!("게시글 작성: {}", created.id_string().unwrap_or_default());

        self.get_feed_posts().await
    }

    /// 전체 피드
    pub async fn get_feed_posts(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = with_store_timeout(self.store_timeout, self.post_store.find_all()).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 특정 작성자의 게시글
    pub async fn get_user_posts(&self, user_id: &str) -> Result<Vec<PostResponse>, AppError> {
        let posts = with_store_timeout(self.store_timeout, self.post_store.find_by_user(user_id)).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// `user_id`의 좋아요 상태를 뒤집고 갱신된 게시글을 반환합니다.
    pub async fn like_post(&self, id: &str, user_id: &str) -> Result<PostResponse, AppError> {
        let mut post = with_store_timeout(self.store_timeout, self.post_store.find_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let liked = post.toggle_like(user_id);
        debug!("좋아요 {}: post={} user={}", if liked { "추가" } else { "취소" }, id, user_id);

        let updated = with_store_timeout(self.store_timeout, self.post_store.set_likes(id, post.likes))
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        Ok(PostResponse::from(updated))
    }
}
