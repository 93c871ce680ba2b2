use serde::{Deserialize, Serialize};

/// 게시글 작성 요청 (`POST /posts`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub picture_path: Option<String>,
}

/// 좋아요 토글 요청 (`PATCH /posts/{id}/like`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePostRequest {
    pub user_id: String,
}
