//! Database queries for the game collection.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::entity::game::{self, ActiveModel, Entity as Game};
use crate::error::{AppError, AppResult};
use crate::models::GameFilter;

use super::DbPool;

impl DbPool {
    /// List a user's games with optional equality filters.
    ///
    /// Always scoped by owner. Each active filter field appends one
    /// conjunctive predicate; no explicit ordering (insertion order).
    pub async fn list_games(
        &self,
        owner_id: i32,
        filter: &GameFilter,
    ) -> AppResult<Vec<game::Model>> {
        let mut select = Game::find().filter(game::Column::IdUsuario.eq(owner_id));

        if let Some(plataforma) = filter.active_plataforma() {
            select = select.filter(game::Column::Plataforma.eq(plataforma));
        }

        if let Some(genero) = filter.active_genero() {
            select = select.filter(game::Column::Genero.eq(genero));
        }

        if let Some(estado) = filter.active_estado() {
            select = select.filter(game::Column::Estado.eq(estado));
        }

        let games = select
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list games: {e}")))?;

        Ok(games)
    }

    /// Get a game by ID.
    pub async fn find_game_by_id(&self, id: i32) -> AppResult<Option<game::Model>> {
        let result = Game::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find game: {e}")))?;

        Ok(result)
    }

    /// Check that a game exists and is owned by the given user.
    ///
    /// Returns false both for a missing game and for a game owned by
    /// someone else, so callers cannot learn whether the row exists.
    pub async fn game_belongs_to(&self, id: i32, owner_id: i32) -> AppResult<bool> {
        let game = self.find_game_by_id(id).await?;
        Ok(game.is_some_and(|g| g.id_usuario == owner_id))
    }

    /// Insert a new game for the given owner.
    pub async fn insert_game(
        &self,
        owner_id: i32,
        titulo: &str,
        plataforma: &str,
        genero: &str,
        estado: &str,
    ) -> AppResult<game::Model> {
        let model = ActiveModel {
            id_usuario: Set(owner_id),
            titulo: Set(titulo.to_string()),
            plataforma: Set(plataforma.to_string()),
            genero: Set(Some(genero.to_string())),
            estado: Set(estado.to_string()),
            imagen: Set(None),
            fecha_creacion: Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert game: {e}")))?;

        Ok(result)
    }

    /// Replace the four mutable fields of a game.
    ///
    /// Performs no ownership check; callers must verify `game_belongs_to`
    /// first. Owner and id are immutable.
    pub async fn update_game(
        &self,
        id: i32,
        titulo: &str,
        plataforma: &str,
        genero: &str,
        estado: &str,
    ) -> AppResult<()> {
        let game = self
            .find_game_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {id}")))?;

        let mut active: ActiveModel = game.into();
        active.titulo = Set(titulo.to_string());
        active.plataforma = Set(plataforma.to_string());
        active.genero = Set(Some(genero.to_string()));
        active.estado = Set(estado.to_string());

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update game: {e}")))?;

        Ok(())
    }

    /// Delete a game by ID, unconditionally.
    ///
    /// Callers must verify `game_belongs_to` first.
    pub async fn delete_game(&self, id: i32) -> AppResult<()> {
        Game::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete game: {e}")))?;

        Ok(())
    }
}
