//! Waiting-room CLI.
//!
//! Polls the room status server until someone joins the meeting's video room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomwatch-client -- --identity alice --meeting-id 42
//! ```

use std::time::Duration;

use clap::Parser;
use roomwatch_client::{RoomStatusClient, WaitOutcome, WaitingRoom};
use roomwatch_shared::setup_logger;

/// Wait in a meeting's waiting room until the host joins
#[derive(Debug, Parser)]
#[command(name = "roomwatch-client", version, about)]
struct Args {
    /// Room status server base URL
    #[arg(long, env = "ROOMWATCH_SERVER_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Identity sent in the Authorization header
    #[arg(long, env = "ROOMWATCH_IDENTITY")]
    identity: String,

    /// Meeting to wait for
    #[arg(long)]
    meeting_id: String,

    /// Seconds between polls
    #[arg(long, default_value_t = 3)]
    interval_secs: u64,

    /// Give up after this many seconds
    #[arg(long, default_value_t = 300)]
    max_wait_secs: u64,

    /// Timeout for each poll request, in seconds
    #[arg(long, default_value_t = 10)]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let client = match RoomStatusClient::new(
        &args.server,
        args.identity,
        Duration::from_secs(args.request_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Client error: {}", e);
            std::process::exit(2);
        }
    };

    let waiting_room = WaitingRoom::new(
        client,
        Duration::from_secs(args.interval_secs),
        Duration::from_secs(args.max_wait_secs),
    );

    match waiting_room.wait_for_host(&args.meeting_id).await {
        WaitOutcome::HostJoined {
            participant_count, ..
        } => {
            println!(
                "Host is in meeting {} ({} participant(s)). You can join now.",
                args.meeting_id, participant_count
            );
        }
        WaitOutcome::TimedOut { attempts } => {
            eprintln!(
                "Nobody joined meeting {} after {} poll(s).",
                args.meeting_id, attempts
            );
            std::process::exit(1);
        }
    }
}
