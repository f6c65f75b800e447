//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `timing` - Per-request execution time logging

pub mod timing;

pub use timing::track_execution_time;
