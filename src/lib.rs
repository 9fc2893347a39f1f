//! Game Shelf server library.
//!
//! This library provides the core functionality for the game collection
//! tracker, including database operations, session authentication, and the
//! HTTP API surface.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
