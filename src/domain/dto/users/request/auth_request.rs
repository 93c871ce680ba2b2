//! 회원가입/로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::user::NewUser;

/// 회원가입 요청
///
/// 길이 제약은 사용자 문서 스키마 제약과 같습니다.
/// 위반 시 저장 실패로 취급되어 500 `{message}`로 응답합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 50, message = "firstName must be between 2 and 50 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, max = 50, message = "lastName must be between 2 and 50 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 50, message = "email is required and must be at most 50 characters"))]
    pub email: String,

    #[validate(length(min = 5, message = "password must be at least 5 characters"))]
    pub password: String,

    #[serde(default)]
    pub picture_path: Option<String>,

    #[serde(default)]
    pub friends: Vec<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub occupation: Option<String>,
}

impl RegisterRequest {
    /// 프로필과 평문 비밀번호로 분리합니다.
    pub fn into_parts(self) -> (NewUser, String) {
        let profile = NewUser {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            picture_path: self.picture_path,
            friends: self.friends,
            location: self.location,
            occupation: self.occupation,
        };

        (profile, self.password)
    }
}

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_short_names_and_password_are_rejected() {
        let mut req = valid();
        req.first_name = "A".to_string();
        assert!(req.validate().is_err());

        let mut req = valid();
        req.password = "1234".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_long_email_is_rejected() {
        let mut req = valid();
        req.email = format!("{}@example.com", "a".repeat(45));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_with_optional_fields() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"a@x.com","password":"secret","location":"London"}"#,
        ).unwrap();

        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.location.as_deref(), Some("London"));
        assert!(req.friends.is_empty());
        assert!(req.picture_path.is_none());
    }

    #[test]
    fn test_into_parts_keeps_password_separate() {
        let (profile, password) = valid().into_parts();
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(password, "secret");
    }
}
