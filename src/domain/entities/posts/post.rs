//! Post Entity Implementation
//!
//! 사용자 게시글 엔티티입니다. MongoDB `posts` 컬렉션 문서와 매핑됩니다.
//! 작성자의 이름/위치/프로필 이미지는 작성 시점의 값이 복사되어 저장됩니다.

use std::collections::HashMap;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 게시글 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 ID
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_path: Option<String>,
    #[serde(default)]
    pub user_picture_path: String,
    /// 좋아요를 누른 사용자 ID → true
    #[serde(default)]
    pub likes: HashMap<String, bool>,
    #[serde(default)]
    pub comments: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Post {
    /// 작성자 정보를 복사해 새 게시글을 만듭니다.
    pub fn new_by(author: &User, description: Option<String>, picture_path: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id: author.id_string().unwrap_or_default(),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            location: author.location.clone(),
            description,
            picture_path,
            user_picture_path: author.picture_path.clone(),
            likes: HashMap::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 좋아요 상태를 뒤집습니다. 호출 후 좋아요 상태이면 `true`를 반환합니다.
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        if self.likes.remove(user_id).is_some() {
            false
        } else {
            self.likes.insert(user_id.to_string(), true);
            true
        }
    }
}
