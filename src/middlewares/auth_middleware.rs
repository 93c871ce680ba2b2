//! JWT 인증 미들웨어
//!
//! 보호된 스코프(`/users`, `/posts`) 앞에서 `Authorization` 헤더의 토큰을 검증하고
//! 성공하면 [`AuthenticatedUser`](crate::domain::auth::AuthenticatedUser)를
//! Request Extensions에 저장합니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음 | 403 `Access Denied` |
//! | 토큰 검증 실패/만료 | 401 `{"error": "..."}` |
//! | 성공 | 다음 서비스로 전달 |

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// ```rust,ignore
/// web::scope("/users")
///     .wrap(AuthMiddleware::required())
///     .service(handlers::users::get_user)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::auth::AuthenticatedUser;
    use crate::test_utils::test_token_service;

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    macro_rules! protected_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_token_service()))
                    .service(web::scope("/p").wrap(AuthMiddleware::required()).service(whoami)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_header_is_access_denied() {
        let app = protected_app!();

        let req = test::TestRequest::get().uri("/p/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(test::read_body(resp).await, "Access Denied");
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let app = protected_app!();

        let req = test::TestRequest::get()
            .uri("/p/whoami")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[actix_web::test]
    async fn test_valid_token_with_or_without_bearer_prefix() {
        let app = protected_app!();
        let token = test_token_service().sign("64b7f0c2a1b2c3d4e5f60718").unwrap();

        for header in [format!("Bearer {}", token), format!("Bearer   {}", token), token.clone()] {
            let req = test::TestRequest::get()
                .uri("/p/whoami")
                .insert_header(("Authorization", header))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(test::read_body(resp).await, "64b7f0c2a1b2c3d4e5f60718");
        }
    }
}
