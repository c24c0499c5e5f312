//! HTTP server implementation.

mod error;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use error::ApiError;
pub use runner::{build_router, run, serve};
