//! SeaORM entity definitions for the SQLite database.

pub mod game;
pub mod user;
