//! Adapters layer - Infrastructure implementations of the ports.
//!
//! - `http` - Axum REST API exposure
//! - `postgres` - sqlx-backed persistence

pub mod http;
pub mod postgres;
