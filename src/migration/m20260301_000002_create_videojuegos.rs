//! Migration: Create videojuegos table.
//!
//! Each game references its owning user. No cascade action is declared;
//! orphaned rows from out-of-band user deletion are accepted.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE IF NOT EXISTS videojuegos (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    id_usuario INTEGER NOT NULL,
                    titulo TEXT NOT NULL,
                    plataforma TEXT NOT NULL,
                    genero TEXT,
                    estado TEXT NOT NULL DEFAULT 'Pendiente',
                    imagen TEXT,
                    fecha_creacion DATETIME DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY(id_usuario) REFERENCES usuarios(id)
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS videojuegos;")
            .await?;

        Ok(())
    }
}
