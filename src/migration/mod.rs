//! SeaORM database migrations.
//!
//! Table creation is idempotent (`CREATE TABLE IF NOT EXISTS`). Order
//! matters: `usuarios` is created before `videojuegos`, which carries the
//! foreign key.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_usuarios;
mod m20260301_000002_create_videojuegos;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_usuarios::Migration),
            Box::new(m20260301_000002_create_videojuegos::Migration),
        ]
    }
}
