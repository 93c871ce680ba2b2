//! 사용자 응답 DTO
//!
//! 모든 사용자 응답은 여기 정의된 허용 목록 구조체로만 만들어집니다.
//! 저장소 엔티티를 그대로 직렬화하거나 필드를 지워서 내보내지 않습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// BSON 시각을 RFC 3339 문자열로 변환합니다.
pub(crate) fn to_rfc3339(value: &DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

/// 공개 사용자 정보 (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub picture_path: String,
    pub friends: Vec<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub viewed_profile: i32,
    pub impressions: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            picture_path: user.picture_path.clone(),
            friends: user.friends.clone(),
            location: user.location.clone(),
            occupation: user.occupation.clone(),
            viewed_profile: user.viewed_profile,
            impressions: user.impressions,
            created_at: to_rfc3339(&user.created_at),
            updated_at: to_rfc3339(&user.updated_at),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// 회원가입 직후의 사용자 레코드
///
/// 기존 클라이언트 호환을 위해 `passwordHash`를 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub password_hash: String,
}

impl From<User> for RegisteredUserResponse {
    fn from(user: User) -> Self {
        Self {
            user: UserResponse::from(&user),
            password_hash: user.password_hash,
        }
    }
}

/// `POST /auth/register` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    pub data: RegisteredUserResponse,
}

impl RegisterResponse {
    pub fn success(user: User) -> Self {
        Self {
            status: "success".to_string(),
            data: RegisteredUserResponse::from(user),
        }
    }
}

/// `POST /auth/login` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// 친구 목록 항목
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub picture_path: String,
}

impl From<&User> for FriendResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            occupation: user.occupation.clone(),
            location: user.location.clone(),
            picture_path: user.picture_path.clone(),
        }
    }
}
