//! Read-only blog endpoints, public.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::Post;
use crate::services::BlogStore;

/// Blog index view data.
#[derive(Serialize)]
struct BlogView<'a> {
    title: &'static str,
    posts: &'a [Post],
    categories: Vec<&'a str>,
}

#[get("/blog")]
async fn list_posts(blog: web::Data<BlogStore>) -> HttpResponse {
    HttpResponse::Ok().json(BlogView {
        title: "Blog",
        posts: blog.all(),
        categories: blog.categories(),
    })
}

#[get("/blog/{id}")]
async fn get_post(blog: web::Data<BlogStore>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = blog
        .find_by_id(id)
        .ok_or_else(|| AppError::NotFound(format!("Post {id}")))?;

    Ok(HttpResponse::Ok().json(post))
}

/// Configure blog routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_posts).service(get_post);
}
