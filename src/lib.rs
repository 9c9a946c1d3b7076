//! mailform library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and the submission handler
//! - `mail`: outbound SMTP delivery boundary
//! - `store`: contact persistence
//! - `db`: migrations and SQLite helpers
//! - `models`: request and response types
//! - `error`: API errors and their HTTP mapping

pub mod app;
pub mod db;
pub mod error;
pub mod http;
pub mod mail;
pub mod models;
pub mod store;
