//! Actix-web extractor guarding private routes behind the session.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError};
use actix_session::SessionExt;
use std::future::{ready, Ready};

use crate::config::SESSION_USER_KEY;
use crate::models::Principal;

/// Raised when no principal is present in the session.
///
/// Rendered as a redirect to the login page rather than an error status.
#[derive(Debug)]
pub struct AuthRedirect;

impl std::fmt::Display for AuthRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not authenticated")
    }
}

impl ResponseError for AuthRedirect {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, "/login"))
            .finish()
    }
}

/// Extractor that requires an authenticated session.
///
/// Use this in handlers behind the session gate:
/// ```ignore
/// async fn admin_panel(auth: SessionAuth) -> impl Responder {
///     // auth.principal carries the session's user id and email
/// }
/// ```
pub struct SessionAuth {
    pub principal: Principal,
}

impl FromRequest for SessionAuth {
    type Error = AuthRedirect;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        // An unreadable session state counts as anonymous.
        match session.get::<Principal>(SESSION_USER_KEY) {
            Ok(Some(principal)) => ready(Ok(SessionAuth { principal })),
            _ => ready(Err(AuthRedirect)),
        }
    }
}
