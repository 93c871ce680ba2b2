//! JWT 토큰 클레임
//!
//! 서명되는 페이로드는 사용자 ID와 RFC 7519 시간 클레임뿐입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `id`: 사용자 ID (ObjectId 16진수 문자열)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}
