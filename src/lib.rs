//! Social network API library
//!
//! User registration and login with salted password digests, profile
//! lookups and posts, backed by PostgreSQL.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
