//! # Post HTTP Handlers
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/posts` | 201 전체 게시글 | 409 `{message}` |
//! | `GET` | `/posts` | 200 전체 게시글 | 404 `{message}` |
//! | `GET` | `/posts/{userId}/posts` | 200 작성자 게시글 | 404 `{message}` |
//! | `PATCH` | `/posts/{id}/like` | 200 갱신된 게시글 | 404 `{message}` |

use actix_multipart::Multipart;
use actix_web::{get, http::StatusCode, patch, post, web, Either, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::auth::AuthenticatedUser,
    domain::dto::posts::{CreatePostRequest, LikePostRequest, PostResponse},
    services::{posts::PostService, storage::AssetStore},
};
use super::form::{read_multipart, resolve_picture_path};
use super::message_response;

/// 게시글 작성
///
/// JSON 또는 multipart(`userId`, `description`, `picturePath`, 선택적 `picture` 파일)를 받습니다.
#[post("")]
pub async fn create_post(
    caller: AuthenticatedUser,
    post_service: web::Data<PostService>,
    asset_store: web::Data<dyn AssetStore>,
    body: Either<web::Json<CreatePostRequest>, Multipart>,
) -> HttpResponse {
    log::debug!("게시글 작성 요청자: {}", caller.user_id);

    let result: Result<Vec<PostResponse>, AppError> = async {
        let request = match body {
            Either::Left(json) => json.into_inner(),
            Either::Right(payload) => {
                let mut form = read_multipart(payload, asset_store.max_upload_bytes()).await?;
                let picture_path = resolve_picture_path(&mut form, asset_store.get_ref()).await?;
                CreatePostRequest {
                    user_id: form.take("userId").unwrap_or_default(),
                    description: form.take("description"),
                    picture_path,
                }
            }
        };

        post_service.create_post(request).await
    }
    .await;

    match result {
        Ok(posts) => HttpResponse::Created().json(posts),
        Err(e) => {
            log::warn!("게시글 작성 실패: {}", e);
            message_response(StatusCode::CONFLICT, &e)
        }
    }
}

#[get("")]
pub async fn get_feed_posts(post_service: web::Data<PostService>) -> HttpResponse {
    match post_service.get_feed_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => message_response(StatusCode::NOT_FOUND, &e),
    }
}

#[get("/{user_id}/posts")]
pub async fn get_user_posts(
    post_service: web::Data<PostService>,
    path: web::Path<String>,
) -> HttpResponse {
    match post_service.get_user_posts(&path).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => message_response(StatusCode::NOT_FOUND, &e),
    }
}

#[patch("/{id}/like")]
pub async fn like_post(
    caller: AuthenticatedUser,
    post_service: web::Data<PostService>,
    path: web::Path<String>,
    payload: web::Json<LikePostRequest>,
) -> HttpResponse {
    log::debug!("좋아요 요청: post={} (요청자 {})", path, caller.user_id);

    match post_service.like_post(&path, &payload.user_id).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(e) => message_response(StatusCode::NOT_FOUND, &e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::test_utils::{
        bearer, configure_test_app, multipart_body, seed_user, test_registry, InMemoryAssetStore,
        InMemoryPostStore, InMemoryUserStore,
    };
    use super::*;

    #[actix_web::test]
    async fn test_post_lifecycle() {
        let users = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&users, "ada@x.com").await;
        let app = test::init_service(App::new().configure(configure_test_app(test_registry(
            users,
            Arc::new(InMemoryPostStore::default()),
            Arc::new(InMemoryAssetStore::default()),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(bearer(&ada))
            .set_json(json!({ "userId": ada, "description": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["firstName"], "ada");
        assert_eq!(body[0]["likes"], json!({}));
        let post_id = body[0]["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/posts/{}/like", post_id))
            .insert_header(bearer(&ada))
            .set_json(json!({ "userId": ada }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["likes"][ada.as_str()], true);

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}/posts", ada))
            .insert_header(bearer(&ada))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri("/posts")
            .insert_header(bearer(&ada))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_post_with_unknown_author_conflicts() {
        let users = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&users, "ada@x.com").await;
        let app = test::init_service(App::new().configure(configure_test_app(test_registry(
            users,
            Arc::new(InMemoryPostStore::default()),
            Arc::new(InMemoryAssetStore::default()),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(bearer(&ada))
            .set_json(json!({ "userId": "64b7f0c2a1b2c3d4e5f60718", "description": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    #[actix_web::test]
    async fn test_create_post_multipart_with_picture() {
        let users = Arc::new(InMemoryUserStore::default());
        let assets = Arc::new(InMemoryAssetStore::default());
        let ada = seed_user(&users, "ada@x.com").await;
        let app = test::init_service(App::new().configure(configure_test_app(test_registry(
            users,
            Arc::new(InMemoryPostStore::default()),
            assets.clone(),
        ))))
        .await;

        let (content_type, body) = multipart_body(
            &[("userId", ada.as_str()), ("description", "beach")],
            Some(("picture", "beach.jpg", &b"jpg"[..])),
        );
        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(bearer(&ada))
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["picturePath"], "beach.jpg");
        assert_eq!(assets.saved().len(), 1);
    }

    #[actix_web::test]
    async fn test_like_unknown_post_is_not_found() {
        let users = Arc::new(InMemoryUserStore::default());
        let ada = seed_user(&users, "ada@x.com").await;
        let app = test::init_service(App::new().configure(configure_test_app(test_registry(
            users,
            Arc::new(InMemoryPostStore::default()),
            Arc::new(InMemoryAssetStore::default()),
        ))))
        .await;

        let req = test::TestRequest::patch()
            .uri("/posts/64b7f0c2a1b2c3d4e5f60718/like")
            .insert_header(bearer(&ada))
            .set_json(json!({ "userId": ada }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
