//! Room status server library.
//!
//! Answers whether a meeting's video room currently has participants, so a
//! client in a waiting room can poll until the host joins.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub use config::ServerConfig;
pub use error::ServerError;

// Re-export entry point
pub use ui::run as run_server;
