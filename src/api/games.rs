//! Game collection handlers, all behind the session gate.
//!
//! Error policy, preserved from the observed system: write paths answer an
//! ownership failure with an explicit 403, while the edit-form read path
//! silently redirects back to the panel on both missing and foreign rows.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::redirect;
use crate::auth::SessionAuth;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Game, GameFilter, GameStatus, Platform, Principal};

/// Admin panel view data.
#[derive(Serialize)]
struct AdminView {
    title: &'static str,
    user: Principal,
    videojuegos: Vec<Game>,
    filtros: GameFilter,
}

/// Edit form view data.
#[derive(Serialize)]
struct EditView {
    title: &'static str,
    user: Principal,
    juego: Game,
}

/// Create/update form fields. All optional so validation can answer with
/// the proper message instead of a framework-level 400.
#[derive(Debug, Deserialize)]
pub struct GameForm {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub plataforma: Option<String>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// Delete form body.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub id: Option<i32>,
}

/// Update form body.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub plataforma: Option<String>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// Validated create/update fields.
struct ValidatedFields {
    titulo: String,
    plataforma: Platform,
    genero: String,
    estado: GameStatus,
}

/// Field validation shared by insert and update.
///
/// Titulo is required after trimming; plataforma and estado must belong to
/// their enumerated sets; genero defaults to empty. Failures are plain-text
/// 400 responses.
fn validate_fields(
    titulo: Option<&str>,
    plataforma: Option<&str>,
    genero: Option<&str>,
    estado: Option<&str>,
) -> Result<ValidatedFields, HttpResponse> {
    let titulo = titulo.unwrap_or("").trim();
    if titulo.is_empty() {
        return Err(HttpResponse::BadRequest().body("El título es obligatorio"));
    }

    let plataforma = plataforma
        .and_then(Platform::parse)
        .ok_or_else(|| HttpResponse::BadRequest().body("Plataforma no válida"))?;

    let estado = estado
        .and_then(GameStatus::parse)
        .ok_or_else(|| HttpResponse::BadRequest().body("Estado no válido"))?;

    Ok(ValidatedFields {
        titulo: titulo.to_string(),
        plataforma,
        genero: genero.unwrap_or("").to_string(),
        estado,
    })
}

/// List the principal's collection, optionally filtered.
///
/// Query parameters pass through to the store unmodified; absent or empty
/// ones do not restrict results.
#[get("/admin")]
async fn admin_panel(
    auth: SessionAuth,
    pool: web::Data<DbPool>,
    query: web::Query<GameFilter>,
) -> AppResult<HttpResponse> {
    let filter = query.into_inner();

    let videojuegos: Vec<Game> = pool
        .list_games(auth.principal.id, &filter)
        .await?
        .into_iter()
        .map(Game::from)
        .collect();

    Ok(HttpResponse::Ok().json(AdminView {
        title: "Mi Colección",
        user: auth.principal,
        videojuegos,
        filtros: filter,
    }))
}

#[post("/videojuegos/insertar")]
async fn insert_game(
    auth: SessionAuth,
    pool: web::Data<DbPool>,
    form: web::Form<GameForm>,
) -> AppResult<HttpResponse> {
    let fields = match validate_fields(
        form.titulo.as_deref(),
        form.plataforma.as_deref(),
        form.genero.as_deref(),
        form.estado.as_deref(),
    ) {
        Ok(fields) => fields,
        Err(response) => return Ok(response),
    };

    pool.insert_game(
        auth.principal.id,
        &fields.titulo,
        fields.plataforma.as_str(),
        &fields.genero,
        fields.estado.as_str(),
    )
    .await?;

    Ok(redirect("/admin"))
}

#[post("/videojuegos/eliminar")]
async fn delete_game(
    auth: SessionAuth,
    pool: web::Data<DbPool>,
    form: web::Form<DeleteForm>,
) -> AppResult<HttpResponse> {
    // A missing id behaves like a foreign row: forbidden.
    let Some(id) = form.id else {
        return Ok(
            HttpResponse::Forbidden().body("No tienes permiso para eliminar este videojuego")
        );
    };

    if !pool.game_belongs_to(id, auth.principal.id).await? {
        return Ok(
            HttpResponse::Forbidden().body("No tienes permiso para eliminar este videojuego")
        );
    }

    pool.delete_game(id).await?;

    Ok(redirect("/admin"))
}

/// Edit form. Missing and foreign rows are indistinguishable from the
/// caller's perspective: both redirect back to the panel.
#[get("/videojuegos/editar/{id}")]
async fn edit_game_form(
    auth: SessionAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match pool.find_game_by_id(id).await? {
        Some(game) if game.id_usuario == auth.principal.id => {
            Ok(HttpResponse::Ok().json(EditView {
                title: "Editar Juego",
                user: auth.principal,
                juego: Game::from(game),
            }))
        }
        _ => Ok(redirect("/admin")),
    }
}

/// Full update of the four mutable fields. Ownership is checked before
/// validation, matching the observed order.
#[post("/videojuegos/actualizar")]
async fn update_game(
    auth: SessionAuth,
    pool: web::Data<DbPool>,
    form: web::Form<UpdateForm>,
) -> AppResult<HttpResponse> {
    let Some(id) = form.id else {
        return Ok(
            HttpResponse::Forbidden().body("No tienes permiso para editar este videojuego")
        );
    };

    if !pool.game_belongs_to(id, auth.principal.id).await? {
        return Ok(
            HttpResponse::Forbidden().body("No tienes permiso para editar este videojuego")
        );
    }

    let fields = match validate_fields(
        form.titulo.as_deref(),
        form.plataforma.as_deref(),
        form.genero.as_deref(),
        form.estado.as_deref(),
    ) {
        Ok(fields) => fields,
        Err(response) => return Ok(response),
    };

    pool.update_game(
        id,
        &fields.titulo,
        fields.plataforma.as_str(),
        &fields.genero,
        fields.estado.as_str(),
    )
    .await?;

    Ok(redirect("/admin"))
}

/// Configure game collection routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_panel)
        .service(insert_game)
        .service(delete_game)
        .service(edit_game_form)
        .service(update_game);
}
