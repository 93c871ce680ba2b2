//! # 사용자 서비스
//!
//! 프로필 조회와 친구 관계 관리를 담당합니다.
//!
//! 친구 관계는 항상 양방향입니다. 한쪽 목록에서 제거하면 상대 목록에서도 제거하고,
//! 추가할 때도 양쪽에 함께 추가합니다.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use log::debug;
use crate::{
    core::errors::AppError,
    domain::{
        dto::users::response::{FriendResponse, UserResponse},
        entities::users::user::User,
    },
    repositories::users::UserStore,
    services::with_store_timeout,
};

pub const USER_NOT_FOUND: &str = "User not found";

/// 사용자 조회/친구 관리 서비스
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    store_timeout: Duration,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, store_timeout: Duration) -> Self {
        Self {
            user_store,
            store_timeout,
        }
    }

    /// ID로 사용자를 조회합니다 (비밀번호 해시 제외).
    pub async fn get_user(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.require_user(id).await?;
        Ok(UserResponse::from(&user))
    }

    /// 사용자의 친구 목록을 친구 ID 순서대로 반환합니다.
    pub async fn get_user_friends(&self, id: &str) -> Result<Vec<FriendResponse>, AppError> {
        let user = self.require_user(id).await?;
        self.format_friends(&user.friends).await
    }

    /// 친구 관계를 토글합니다.
    ///
    /// - 이미 친구면 양쪽 목록에서 서로를 제거
    /// - 아니면 양쪽 목록에 서로를 추가
    ///
    /// 결과로 `id` 사용자의 갱신된 친구 목록을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자 또는 친구가 없거나, 자기 자신을 친구로 지정한 경우
    pub async fn add_remove_friend(&self, id: &str, friend_id: &str) -> Result<Vec<FriendResponse>, AppError> {
        if id == friend_id {
            return Err(AppError::NotFound("A user cannot befriend themselves".to_string()));
        }

        let mut user = self.require_user(id).await?;
        let mut friend = self.require_user(friend_id).await?;

        if user.is_friend_with(friend_id) {
            user.friends.retain(|f| f != friend_id);
            friend.friends.retain(|f| f != id);
            debug!("친구 관계 해제: {} ↔ {}", id, friend_id);
        } else {
            user.friends.push(friend_id.to_string());
            if !friend.is_friend_with(id) {
                friend.friends.push(id.to_string());
            }
            debug!("친구 관계 추가: {} ↔ {}", id, friend_id);
        }

        let updated = with_store_timeout(
            self.store_timeout,
            self.user_store.set_friends(id, user.friends),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        with_store_timeout(
            self.store_timeout,
            self.user_store.set_friends(friend_id, friend.friends),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        self.format_friends(&updated.friends).await
    }

    async fn require_user(&self, id: &str) -> Result<User, AppError> {
        with_store_timeout(self.store_timeout, self.user_store.find_by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    async fn format_friends(&self, friend_ids: &[String]) -> Result<Vec<FriendResponse>, AppError> {
        let friends = with_store_timeout(self.store_timeout, self.user_store.find_by_ids(friend_ids)).await?;

        let by_id: HashMap<String, User> = friends
            .into_iter()
            .filter_map(|friend| friend.id_string().map(|id| (id, friend)))
            .collect();

        Ok(friend_ids
            .iter()
            .filter_map(|id| by_id.get(id))
            .map(FriendResponse::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_user, InMemoryUserStore};

    fn service(store: Arc<InMemoryUserStore>) -> UserService {
        UserService::new(store, Duration::from_secs(5))
    }

    #[actix_web::test]
    async fn test_get_user_unknown_is_not_found() {
        let service = service(Arc::new(InMemoryUserStore::default()));

        let err = service.get_user("64b7f0c2a1b2c3d4e5f60718").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.get_user("garbage").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_toggle_friend_adds_then_removes_on_both_sides() {
        let store = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&store, "ada@x.com").await;
        let bob = seed_user(&store, "bob@x.com").await;
        let service = service(store.clone());

        let friends = service.add_remove_friend(&ada, &bob).await.unwrap();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].id, bob);
        assert_eq!(service.get_user(&bob).await.unwrap().friends, vec![ada.clone()]);

        let friends = service.add_remove_friend(&ada, &bob).await.unwrap();
        assert!(friends.is_empty());
        assert!(service.get_user(&bob).await.unwrap().friends.is_empty());
    }

    #[actix_web::test]
    async fn test_friend_list_keeps_insertion_order() {
        let store = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&store, "ada@x.com").await;
        let bob = seed_user(&store, "bob@x.com").await;
        let cy = seed_user(&store, "cy@x.com").await;
        let service = service(store);

        service.add_remove_friend(&ada, &cy).await.unwrap();
        service.add_remove_friend(&ada, &bob).await.unwrap();

        let ids: Vec<String> = service
            .get_user_friends(&ada)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![cy, bob]);
    }

    #[actix_web::test]
    async fn test_self_friendship_is_rejected() {
        let store = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&store, "ada@x.com").await;
        let service = service(store);

        let err = service.add_remove_friend(&ada, &ada).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_unknown_friend_is_not_found() {
        let store = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&store, "ada@x.com").await;
        let service = service(store);

        let err = service
            .add_remove_friend(&ada, "64b7f0c2a1b2c3d4e5f60718")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
