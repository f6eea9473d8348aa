//! Data layer for a small car selling catalog: a SQLite-backed listing
//! store plus a pure in-memory search filter. Embedders initialize the
//! pool once at startup and hand the store to their presentation layer.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod search;
