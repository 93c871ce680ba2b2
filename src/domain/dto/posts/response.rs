use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::domain::dto::users::response::user_response::to_rfc3339;
use crate::domain::entities::posts::post::Post;

/// 게시글 응답
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub picture_path: Option<String>,
    pub user_picture_path: String,
    pub likes: HashMap<String, bool>,
    pub comments: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id_string().unwrap_or_default(),
            created_at: to_rfc3339(&post.created_at),
            updated_at: to_rfc3339(&post.updated_at),
            user_id: post.user_id,
            first_name: post.first_name,
            last_name: post.last_name,
            location: post.location,
            description: post.description,
            picture_path: post.picture_path,
            user_picture_path: post.user_picture_path,
            likes: post.likes,
            comments: post.comments,
        }
    }
}
