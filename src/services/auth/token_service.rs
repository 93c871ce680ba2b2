//! JWT 토큰 서비스
//!
//! HS256으로 토큰을 서명하고 검증합니다. 서명 키와 만료 시간은
//! [`JwtConfig`]로 생성 시점에 주입됩니다.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    core::errors::AppError,
    domain::models::token::TokenClaims,
};

/// 토큰 서명/검증 서비스
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 사용자 ID를 담은 액세스 토큰을 발급합니다.
    ///
    /// 페이로드는 `{id, iat, exp}`이며 `exp`는 발급 시각 + `expiration_hours`입니다.
    pub fn sign(&self, user_id: &str) -> Result<String, AppError> {
        let hours = self.config.expiration_hours;
        if hours <= 0 {
            return Err(AppError::InternalError(format!(
                "JWT 만료 시간은 양수여야 합니다: {}",
                hours
            )));
        }

        let now = Utc::now();
        let expiration = TimeDelta::try_hours(hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::InternalError(format!("JWT 만료 시각 계산 범위 초과: {}시간", hours))
            })?;

        let claims = TokenClaims {
            id: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// 모든 검증 실패는 `AuthenticationError`(401)입니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("Invalid token signature".to_string())
                }
                _ => AppError::AuthenticationError(format!("Invalid token: {}", e)),
            })
    }

    /// `Authorization` 헤더 값에서 토큰을 꺼냅니다.
    ///
    /// `Bearer ` 접두사가 있으면 제거하고 앞쪽 공백을 자릅니다.
    /// 접두사가 없으면 헤더 값 전체를 토큰으로 봅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> &'a str {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) => token.trim_start(),
            None => auth_header,
        }
    }
}
