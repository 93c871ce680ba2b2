//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 하위 에러에 문맥을 붙여 `InternalError`로 변환
//!
//! ### [`registry`] - 서비스 조립
//! - **ServiceRegistry**: 설정과 저장소를 받아 모든 서비스를 한 번 생성
//! - 생성된 서비스는 `web::Data`로 각 워커의 `App`에 등록됩니다
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use social_backend::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::with_mongo(&config, &database).await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| registry.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
