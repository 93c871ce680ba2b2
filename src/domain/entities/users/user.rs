//! User Entity Implementation
//!
//! 소셜 네트워크 사용자 엔티티입니다. MongoDB `users` 컬렉션 문서와 1:1로 매핑됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 프로필 카운터(`viewedProfile`, `impressions`) 초기값의 상한 (미포함)
pub const PROFILE_COUNTER_UPPER_BOUND: i32 = 1000;

/// 사용자 엔티티
///
/// `password_hash`에는 항상 bcrypt 해시만 저장되며 평문 비밀번호는 어디에도 남지 않습니다.
/// 이 구조체는 저장소 전용이며, HTTP 응답은 반드시
/// [`UserResponse`](crate::domain::dto::users::response::UserResponse) 같은 허용 목록 DTO를 거칩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    /// 사용자 이메일 (unique, 로그인 키)
    pub email: String,
    /// bcrypt 해시 (`$2b$...`)
    pub password_hash: String,
    /// 업로드된 프로필 이미지 파일명
    #[serde(default)]
    pub picture_path: String,
    /// 친구 사용자 ID 목록 (16진수 ObjectId 문자열)
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    pub viewed_profile: i32,
    pub impressions: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 새 사용자 생성에 필요한 프로필 정보 (비밀번호 제외)
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub picture_path: Option<String>,
    pub friends: Vec<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 카운터 두 개는 주입된 난수 소스에서 `[0, 1000)` 구간으로 뽑습니다.
    /// 같은 시드의 난수 소스를 넘기면 같은 결과가 나옵니다.
    pub fn new_local<R: Rng + ?Sized>(profile: NewUser, password_hash: String, rng: &mut R) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            password_hash,
            picture_path: profile.picture_path.unwrap_or_default(),
            friends: profile.friends,
            location: profile.location,
            occupation: profile.occupation,
            viewed_profile: rng.gen_range(0..PROFILE_COUNTER_UPPER_BOUND),
            impressions: rng.gen_range(0..PROFILE_COUNTER_UPPER_BOUND),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 사용자가 친구 목록에 있는지 확인
    pub fn is_friend_with(&self, user_id: &str) -> bool {
        self.friends.iter().any(|friend| friend == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile() -> NewUser {
        NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_local_counters_are_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let user = User::new_local(profile(), "$2b$04$hash".to_string(), &mut rng);
            assert!((0..PROFILE_COUNTER_UPPER_BOUND).contains(&user.viewed_profile));
            assert!((0..PROFILE_COUNTER_UPPER_BOUND).contains(&user.impressions));
        }
    }

    #[test]
    fn test_new_local_is_deterministic_for_a_seed() {
        let a = User::new_local(profile(), "h".to_string(), &mut StdRng::seed_from_u64(42));
        let b = User::new_local(profile(), "h".to_string(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a.viewed_profile, b.viewed_profile);
        assert_eq!(a.impressions, b.impressions);
    }

    #[test]
    fn test_new_local_defaults() {
        let user = User::new_local(profile(), "h".to_string(), &mut StdRng::seed_from_u64(1));
        assert!(user.id.is_none());
        assert_eq!(user.picture_path, "");
        assert!(user.friends.is_empty());
        assert_eq!(user.id_string(), None);
    }

    #[test]
    fn test_is_friend_with() {
        let mut user = User::new_local(profile(), "h".to_string(), &mut StdRng::seed_from_u64(1));
        user.friends.push("64b7f0c2a1b2c3d4e5f60718".to_string());
        assert!(user.is_friend_with("64b7f0c2a1b2c3d4e5f60718"));
        assert!(!user.is_friend_with("64b7f0c2a1b2c3d4e5f60719"));
    }
}
