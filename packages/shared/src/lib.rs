//! Shared utilities for the Roomwatch server and client binaries.

pub mod logger;

pub use logger::setup_logger;
