//! Shared test infrastructure: a throwaway SQLite database, a small blog
//! fixture, and an app instance wired exactly like production.

use actix_http::Request;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App, Error};
use tempfile::TempDir;

use game_shelf_lib::api;
use game_shelf_lib::db::DbPool;
use game_shelf_lib::migration::{Migrator, MigratorTrait};
use game_shelf_lib::services::BlogStore;

const POSTS_FIXTURE: &str = r#"[
    {"id": 1, "title": "Los RPG que marcaron una década", "category": "Opinión", "content": "..."},
    {"id": 2, "title": "Guía para empezar tu backlog", "category": "Guías", "content": "..."},
    {"id": 3, "title": "Retro: la cuarta generación", "category": "Opinión", "content": "..."}
]"#;

/// Everything a test needs; dropping it removes the database file.
pub struct TestContext {
    pub pool: DbPool,
    pub blog: BlogStore,
    _dir: TempDir,
}

/// Fresh database with migrations applied and the admin account seeded.
pub async fn setup() -> TestContext {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let db_path = dir.path().join("games.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = DbPool::connect(&url).await.expect("Failed to connect");
    Migrator::up(pool.connection(), None)
        .await
        .expect("Failed to migrate");
    pool.seed_default_admin().await.expect("Failed to seed");

    let posts_path = dir.path().join("posts.json");
    std::fs::write(&posts_path, POSTS_FIXTURE).expect("Failed to write posts fixture");
    let blog = BlogStore::load(&posts_path).expect("Failed to load blog fixture");

    TestContext {
        pool,
        blog,
        _dir: dir,
    }
}

/// Build the app with the production routing table and a test session key.
pub async fn spawn_app(
    ctx: &TestContext,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let session_key = Key::from(&[7u8; 64]);

    test::init_service(
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key)
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(ctx.pool.clone()))
            .app_data(web::Data::new(ctx.blog.clone()))
            .configure(api::configure_app),
    )
    .await
}

/// Create an extra account by direct store manipulation; there is no
/// signup flow in the application.
pub async fn create_user(pool: &DbPool, email: &str, password: &str) {
    use game_shelf_lib::entity::user;
    use sea_orm::{ActiveModelTrait, Set};

    user::ActiveModel {
        email: Set(email.to_string()),
        password: Set(password.to_string()),
        ..Default::default()
    }
    .insert(pool.connection())
    .await
    .expect("Failed to insert user");
}

/// Extract the session cookie from a response, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

/// Log in and return the session cookie. Panics if the login does not
/// redirect to the admin panel.
pub async fn login<S, B>(app: &S, name: &str, password: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("name", name), ("password", password)])
        .to_request();
    let res = test::call_service(app, req).await;

    assert_eq!(res.status(), StatusCode::FOUND, "login should redirect");
    assert_eq!(location(&res), "/admin");

    session_cookie(&res).expect("login should set a session cookie")
}

/// The Location header of a redirect response.
pub fn location<B>(res: &ServiceResponse<B>) -> &str {
    res.headers()
        .get(actix_web::http::header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .expect("Location should be valid UTF-8")
}
