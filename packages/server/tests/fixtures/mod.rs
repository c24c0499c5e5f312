//! Shared fixtures for server integration tests.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use roomwatch_server::{
    domain::{ProviderError, ProviderParticipant, ProviderRoom, RoomName, RoomSid, VideoProvider},
    ui::{serve, state::AppState},
};
use tokio::{net::TcpListener, sync::oneshot};

/// A server bound to an ephemeral port, stopped on drop.
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start(provider: Arc<dyn VideoProvider>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (tx, rx) = oneshot::channel::<()>();
        let state = Arc::new(AppState::new(provider));

        tokio::spawn(async move {
            let _ = serve(listener, state, async {
                let _ = rx.await;
            })
            .await;
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/video/check-room-status", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// What the fake returns for the room lookup.
#[derive(Clone)]
pub enum RoomsReply {
    Rooms(Vec<ProviderRoom>),
    Fail(ProviderError),
    Panic,
}

/// Scripted VideoProvider that records the room names it was asked about.
pub struct FakeProvider {
    rooms: RoomsReply,
    participants: Result<usize, ProviderError>,
    pub requested_names: Mutex<Vec<String>>,
    pub requested_rooms: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new(rooms: RoomsReply, participants: Result<usize, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            rooms,
            participants,
            requested_names: Mutex::new(Vec::new()),
            requested_rooms: Mutex::new(Vec::new()),
        })
    }

    /// No in-progress room.
    pub fn empty() -> Arc<Self> {
        Self::new(RoomsReply::Rooms(vec![]), Ok(0))
    }

    /// One in-progress room with `count` participants.
    pub fn with_participants(count: usize) -> Arc<Self> {
        Self::new(RoomsReply::Rooms(vec![room("RM1")]), Ok(count))
    }
}

pub fn room(sid: &str) -> ProviderRoom {
    ProviderRoom {
        sid: RoomSid::new(sid.to_string()).expect("valid sid"),
    }
}

#[async_trait]
impl VideoProvider for FakeProvider {
    async fn find_in_progress_rooms(
        &self,
        name: &RoomName,
    ) -> Result<Vec<ProviderRoom>, ProviderError> {
        self.requested_names
            .lock()
            .unwrap()
            .push(name.as_str().to_string());
        match &self.rooms {
            RoomsReply::Rooms(rooms) => Ok(rooms.clone()),
            RoomsReply::Fail(error) => Err(error.clone()),
            RoomsReply::Panic => panic!("provider exploded"),
        }
    }

    async fn list_participants(
        &self,
        room: &RoomSid,
    ) -> Result<Vec<ProviderParticipant>, ProviderError> {
        self.requested_rooms
            .lock()
            .unwrap()
            .push(room.as_str().to_string());
        self.participants.clone().map(|count| {
            (0..count)
                .map(|i| ProviderParticipant {
                    sid: format!("PA{i}"),
                    identity: Some(format!("user-{i}")),
                })
                .collect()
        })
    }
}
