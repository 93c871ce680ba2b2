//! 보안 응답 헤더
//!
//! 모든 응답에 기본 보안 헤더를 붙입니다. 업로드 이미지는 다른 Origin의
//! 프론트엔드에서 로드되므로 `Cross-Origin-Resource-Policy`는 `cross-origin`입니다.

use actix_web::middleware::DefaultHeaders;

pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Cross-Origin-Resource-Policy", "cross-origin"))
        .add(("X-DNS-Prefetch-Control", "off"))
}
