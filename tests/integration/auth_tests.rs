//! Login, logout, and session gate behavior.

use actix_web::http::StatusCode;
use actix_web::test;

use crate::common;

/// Correct credentials authenticate the session and the panel opens.
#[actix_web::test]
async fn test_login_success_then_admin_is_accessible() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let cookie = common::login(&app, "admin", "admin").await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
}

/// A wrong password re-renders the login view with a generic error and
/// leaves the session anonymous.
#[actix_web::test]
async fn test_login_wrong_password_stays_anonymous() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("name", "admin"), ("password", "wrong")])
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Credenciales incorrectas");

    // Session is still anonymous: the panel redirects to login.
    let req = test::TestRequest::get().uri("/admin").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(common::location(&res), "/login");
}

/// Unknown account behaves exactly like a wrong password.
#[actix_web::test]
async fn test_login_unknown_user_same_generic_error() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("name", "nobody"), ("password", "admin")])
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["error"], "Credenciales incorrectas");
}

/// Every private route redirects anonymous callers to /login, never an
/// error status.
#[actix_web::test]
async fn test_private_routes_redirect_anonymous_to_login() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let private_gets = ["/admin", "/videojuegos/editar/1"];
    for uri in private_gets {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(common::location(&res), "/login", "{uri}");
    }

    let private_posts = [
        "/videojuegos/insertar",
        "/videojuegos/eliminar",
        "/videojuegos/actualizar",
    ];
    for uri in private_posts {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_form([("id", "1")])
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(common::location(&res), "/login", "{uri}");
    }
}

/// Logout destroys the session; the follow-up panel request is redirected
/// to login again.
#[actix_web::test]
async fn test_logout_destroys_session() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    let cookie = common::login(&app, "admin", "admin").await;

    let req = test::TestRequest::get()
        .uri("/logout")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(common::location(&res), "/");

    // The logout response replaces the session cookie with a removal one.
    let cleared = common::session_cookie(&res).expect("logout should clear the cookie");

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(cleared)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(common::location(&res), "/login");
}

/// Public pages stay reachable without a session.
#[actix_web::test]
async fn test_public_pages_need_no_session() {
    let ctx = common::setup().await;
    let app = common::spawn_app(&ctx).await;

    for uri in ["/", "/login"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }
}
