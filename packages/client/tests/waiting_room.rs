//! Waiting-room integration tests.
//!
//! The client polls an in-process fake of the room status endpoint.

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use roomwatch_client::{RoomStatusClient, RoomStatusView, WaitOutcome, WaitingRoom};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Clone, Copy)]
enum Script {
    /// Host joins on the given poll (1-based).
    HostJoinsOn(usize),
    /// Always answers 500 with an error body.
    AlwaysFails,
    /// Room open, nobody inside.
    AlwaysEmpty,
}

struct FakeServer {
    script: Script,
    polls: AtomicUsize,
}

async fn check_room_status(
    State(state): State<Arc<FakeServer>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if headers.get("authorization").is_none() {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response();
    }
    assert_eq!(body["meetingId"], "42");

    let poll = state.polls.fetch_add(1, Ordering::SeqCst) + 1;
    match state.script {
        Script::HostJoinsOn(n) if poll >= n => Json(json!({
            "hasParticipants": true, "participantCount": 2, "roomExists": true
        }))
        .into_response(),
        Script::HostJoinsOn(_) => Json(json!({
            "hasParticipants": false, "participantCount": 0, "roomExists": false
        }))
        .into_response(),
        Script::AlwaysFails => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "boom", "hasParticipants": false, "roomExists": false})),
        )
            .into_response(),
        Script::AlwaysEmpty => Json(json!({
            "hasParticipants": false, "participantCount": 0, "roomExists": true
        }))
        .into_response(),
    }
}

async fn start(script: Script) -> (SocketAddr, Arc<FakeServer>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let state = Arc::new(FakeServer {
        script,
        polls: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/video/check-room-status", post(check_room_status))
        .with_state(state.clone());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, state)
}

fn client(addr: SocketAddr) -> RoomStatusClient {
    RoomStatusClient::new(&format!("http://{addr}"), "user-1", Duration::from_secs(2))
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_wait_until_host_joins() {
    // テスト項目: ホストが参加するまでポーリングを続ける
    // given (前提条件):
    let (addr, state) = start(Script::HostJoinsOn(3)).await;
    let waiting_room = WaitingRoom::new(
        client(addr),
        Duration::from_millis(20),
        Duration::from_secs(5),
    );

    // when (操作):
    let outcome = waiting_room.wait_for_host("42").await;

    // then (期待する結果):
    assert_eq!(
        outcome,
        WaitOutcome::HostJoined {
            participant_count: 2,
            attempts: 3
        }
    );
    assert_eq!(state.polls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_server_errors_do_not_end_wait() {
    // テスト項目: サーバーエラーが続いても待機は打ち切られずタイムアウトまで続く
    let (addr, state) = start(Script::AlwaysFails).await;
    let waiting_room = WaitingRoom::new(
        client(addr),
        Duration::from_millis(20),
        Duration::from_millis(200),
    );

    let outcome = waiting_room.wait_for_host("42").await;

    let attempts = match outcome {
        WaitOutcome::TimedOut { attempts } => attempts,
        other => panic!("expected timeout, got {other:?}"),
    };
    assert!(attempts > 1);
    assert_eq!(state.polls.load(Ordering::SeqCst), attempts as usize);
}

#[tokio::test]
async fn test_empty_room_times_out() {
    // テスト項目: ルームが空のままなら TimedOut
    let (addr, _state) = start(Script::AlwaysEmpty).await;
    let waiting_room = WaitingRoom::new(
        client(addr),
        Duration::from_millis(20),
        Duration::from_millis(100),
    );

    let outcome = waiting_room.wait_for_host("42").await;

    assert!(matches!(outcome, WaitOutcome::TimedOut { .. }));
}

#[tokio::test]
async fn test_check_maps_non_200_to_failed_view() {
    // テスト項目: 非 200 の応答は roomExists: false と error に変換される
    let (addr, _state) = start(Script::AlwaysFails).await;

    let view = client(addr).check("42").await;

    assert_eq!(
        view,
        RoomStatusView {
            has_participants: false,
            participant_count: 0,
            room_exists: false,
            error: Some("boom".to_string()),
        }
    );
}

#[tokio::test]
async fn test_check_unreachable_server() {
    // テスト項目: 接続できないサーバーでも panic せず error を返す
    // given (前提条件): 一度バインドして解放したポート
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    // when (操作):
    let view = client(addr).check("42").await;

    // then (期待する結果):
    assert!(!view.has_participants);
    assert!(!view.room_exists);
    assert!(view.error.is_some());
}
