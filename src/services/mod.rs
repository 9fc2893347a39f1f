//! Service modules.

pub mod blog;

pub use blog::BlogStore;
