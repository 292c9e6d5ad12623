use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::ws::{CloseFrame, Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::Instrument;

use seedscan_engine::{validator, CubiomesOracle};

use crate::dto::{SearchRequestDto, StreamFrame};
use crate::state::AppState;

const CLOSE_NORMAL: u16 = 1000;
const CLOSE_PROTOCOL_ERROR: u16 = 1003;

pub async fn handle_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let Some(Ok(Message::Text(text))) = socket.recv().await else {
        close_with_error(&mut socket, "expected one text frame with the search request").await;
        return;
    };

    let dto: SearchRequestDto = match serde_json::from_str(&text) {
        Ok(dto) => dto,
        Err(_) => {
            close_with_error(&mut socket, "bad request body").await;
            return;
        }
    };

    let request = match validator::validate(&CubiomesOracle, &dto.into()) {
        Ok(request) => request,
        Err(e) => {
            close_with_error(&mut socket, &e.to_string()).await;
            return;
        }
    };

    let Ok(_permit) = state.search_admission.try_acquire() else {
        close_with_error(&mut socket, "too many searches in flight, try again shortly").await;
        return;
    };

    let span = tracing::info_span!(
        "search_stream",
        version = ?request.version,
        seed_count = request.total_seeds(),
        max_results = request.max_results,
    );

    async move {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<i64>();

        let worker_cancelled = Arc::clone(&cancelled);
        let scan_handle = tokio::task::spawn_blocking(move || {
            seedscan_engine::search_stream(&request, &worker_cancelled, move |seed| {
                let _ = tx.send(seed);
            })
        });

        loop {
            tokio::select! {
                seed = rx.recv() => {
                    match seed {
                        Some(seed) => {
                            if send_frame(&mut socket, &StreamFrame::Seed { seed }).await.is_err() {
                                cancelled.store(true, Ordering::Relaxed);
                                break;
                            }
                        }
                        None => break,
                    }
                }
                incoming = socket.recv() => {
                    if incoming.is_none() {
                        cancelled.store(true, Ordering::Relaxed);
                        break;
                    }
                }
            }
        }

        let scanned = scan_handle.await.unwrap_or(0);
        tracing::info!(scanned, "stream complete");
        let _ = send_frame(&mut socket, &StreamFrame::Done { done: true, scanned }).await;
        let _ = socket
            .send(Message::Close(Some(CloseFrame {
                code: CLOSE_NORMAL,
                reason: "search complete".into(),
            })))
            .await;
    }
    .instrument(span)
    .await;
}

async fn send_frame(socket: &mut WebSocket, frame: &StreamFrame) -> Result<(), axum::Error> {
    let text = serde_json::to_string(frame).expect("StreamFrame always serialises");
    socket.send(Message::Text(text)).await
}

async fn close_with_error(socket: &mut WebSocket, message: &str) {
    let _ = send_frame(
        socket,
        &StreamFrame::Error {
            error: message.to_string(),
        },
    )
    .await;
    let _ = socket
        .send(Message::Close(Some(CloseFrame {
            code: CLOSE_PROTOCOL_ERROR,
            reason: message.to_string().into(),
        })))
        .await;
}
