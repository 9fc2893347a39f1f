//! Domain models for the Game Shelf server.

pub mod game;
pub mod post;
pub mod user;

// Re-export commonly used types
pub use game::{Game, GameFilter, GameStatus, Platform};
pub use post::Post;
pub use user::Principal;
