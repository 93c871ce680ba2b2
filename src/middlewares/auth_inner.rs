//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::services::auth::TokenService;

/// 헤더가 없을 때의 응답 본문
pub const ACCESS_DENIED: &str = "Access Denied";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .map(str::to_string);

            let Some(auth_header) = auth_header else {
                log::warn!("인증 헤더 없음: {}", req.path());
                let response = HttpResponse::Forbidden().body(ACCESS_DENIED);
                return Ok(req.into_response(response).map_into_right_body());
            };

            match authenticate(&req, &auth_header) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = actix_web::ResponseError::error_response(&err);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 헤더 값에서 토큰을 꺼내 검증하고 인증 사용자 정보를 만듭니다.
fn authenticate(req: &ServiceRequest, auth_header: &str) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header);
    let claims = token_service.verify(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.id,
    })
}
