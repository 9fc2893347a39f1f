//! Public pages and the authentication state machine.
//!
//! Two states: anonymous and authenticated. Login moves forward on exact
//! email and password equality; logout destroys the session outright.

use actix_session::Session;
use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::redirect;
use crate::config::SESSION_USER_KEY;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::Principal;

/// Landing page view data.
#[derive(Serialize)]
struct LandingView {
    title: &'static str,
}

/// Login view data; `error` is populated after a failed attempt.
#[derive(Serialize)]
struct LoginView {
    title: &'static str,
    error: Option<&'static str>,
}

/// Credential submission. Missing fields behave like empty ones.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(LandingView {
        title: "Game Collection",
    })
}

#[get("/login")]
async fn login_form() -> HttpResponse {
    HttpResponse::Ok().json(LoginView {
        title: "Login",
        error: None,
    })
}

/// Credential check: plain equality against the stored password.
///
/// Any non-match re-renders the login view with a generic message; there is
/// no lockout and no attempt counting.
#[post("/login")]
async fn login(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let user = pool.find_user_by_email(&form.name).await?;

    match user {
        Some(user) if user.password == form.password => {
            let principal = Principal::new(user.id, user.email);
            session
                .insert(SESSION_USER_KEY, principal)
                .map_err(|e| AppError::Session(format!("Failed to store principal: {e}")))?;
            Ok(redirect("/admin"))
        }
        _ => Ok(HttpResponse::Ok().json(LoginView {
            title: "Login",
            error: Some("Credenciales incorrectas"),
        })),
    }
}

#[get("/logout")]
async fn logout(session: Session) -> HttpResponse {
    session.purge();
    redirect("/")
}

/// Configure public page routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(login_form)
        .service(login)
        .service(logout);
}
