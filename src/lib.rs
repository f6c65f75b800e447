//! Loyalty Memberships - Provider point membership service
//!
//! This crate implements registration and point accounting for loyalty
//! memberships across providers, exposed over a REST API and persisted
//! in PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
