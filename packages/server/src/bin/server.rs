//! Room status server.
//!
//! Reports whether the Twilio video room of a meeting has participants.
//!
//! Run with:
//! ```not_rust
//! TWILIO_ACCOUNT_SID=AC... TWILIO_AUTH_TOKEN=... cargo run --bin roomwatch-server
//! ```

use clap::Parser;
use roomwatch_server::ServerConfig;
use roomwatch_shared::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = roomwatch_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
