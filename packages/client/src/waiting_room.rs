//! Waiting room: poll until the host joins.

use std::time::Duration;

use tokio::time::Instant;

use crate::status_client::RoomStatusClient;

/// How a wait ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// Someone is in the room.
    HostJoined {
        participant_count: usize,
        attempts: u32,
    },
    /// `max_wait` elapsed without anyone joining.
    TimedOut { attempts: u32 },
}

/// Polls the room status endpoint at a fixed interval.
///
/// Errors reported by the server do not end the wait; they are logged and
/// the next poll goes ahead.
pub struct WaitingRoom {
    client: RoomStatusClient,
    interval: Duration,
    max_wait: Duration,
}

impl WaitingRoom {
    pub fn new(client: RoomStatusClient, interval: Duration, max_wait: Duration) -> Self {
        Self {
            client,
            interval,
            max_wait,
        }
    }

    pub async fn wait_for_host(&self, meeting_id: &str) -> WaitOutcome {
        let started = Instant::now();
        let mut attempts = 0;

        loop {
            attempts += 1;
            let status = self.client.check(meeting_id).await;

            if status.has_participants {
                tracing::info!(
                    "Host joined meeting {} ({} participant(s)) after {} poll(s)",
                    meeting_id,
                    status.participant_count,
                    attempts
                );
                return WaitOutcome::HostJoined {
                    participant_count: status.participant_count,
                    attempts,
                };
            }

            match &status.error {
                Some(error) => tracing::warn!("Poll {} failed: {}", attempts, error),
                None if status.room_exists => {
                    tracing::info!("Room is open, waiting for the host to join...")
                }
                None => tracing::info!("Room not started yet, waiting..."),
            }

            if started.elapsed() + self.interval > self.max_wait {
                tracing::warn!("Gave up waiting for meeting {} after {} poll(s)", meeting_id, attempts);
                return WaitOutcome::TimedOut { attempts };
            }

            tokio::time::sleep(self.interval).await;
        }
    }
}
