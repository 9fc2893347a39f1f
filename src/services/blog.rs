//! Read-only blog backed by a JSON file.
//!
//! Posts are parsed once at startup and served from memory; there is no
//! reload or mutation path.

use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Post;

/// In-memory store of blog posts.
#[derive(Debug, Clone)]
pub struct BlogStore {
    posts: Vec<Post>,
}

impl BlogStore {
    /// Load posts from the JSON file at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Blog(format!("Failed to read {}: {e}", path.display()))
        })?;

        let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Blog(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(BlogStore { posts })
    }

    /// All posts, in file order.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a single post by id.
    pub fn find_by_id(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for post in &self.posts {
            if !seen.contains(&post.category.as_str()) {
                seen.push(post.category.as_str());
            }
        }
        seen
    }
}
