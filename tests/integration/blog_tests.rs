//! Read-only blog endpoints.

use actix_web::http::StatusCode;
use actix_web::test;

use crate::common;

#[actix_web::test]
async fn test_blog_index_lists_posts_and_categories() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let req = test::TestRequest::get().uri("/blog").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["posts"].as_array().expect("posts").len(), 3);
    // Deduplicated, first-seen order
    assert_eq!(
        body["categories"],
        serde_json::json!(["Opinión", "Guías"])
    );
}

#[actix_web::test]
async fn test_blog_post_by_id() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let req = test::TestRequest::get().uri("/blog/2").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["title"], "Guía para empezar tu backlog");
}

#[actix_web::test]
async fn test_blog_unknown_post_is_404() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let req = test::TestRequest::get().uri("/blog/999").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
