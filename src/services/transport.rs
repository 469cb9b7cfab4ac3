//! Stream Transport
//!
//! WebSocket transport behind a narrow seam, so the monitor can be driven
//! by a fake emitting synthetic events in tests.

use crate::services::events::{StreamEvent, StreamRequest};
use crate::services::runtime::spawn_in_tokio;
use crossbeam_channel::Sender;
use futures::StreamExt;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;

/// Opens push connections on behalf of the monitor
pub trait Transport {
    /// Open a connection. Returns immediately; open, message, error and
    /// close all arrive later as [`StreamEvent`]s tagged with the request's
    /// handle.
    fn open(&self, request: StreamRequest, tx: Sender<StreamEvent>) -> Box<dyn StreamGuard>;
}

/// Held by the monitor for the lifetime of one connection
pub trait StreamGuard: Send {
    /// Tear the connection down; idempotent
    fn close(&mut self);
}

/// Production transport speaking WebSocket via tokio-tungstenite
#[derive(Debug, Default)]
pub struct WsTransport;

impl Transport for WsTransport {
    fn open(&self, request: StreamRequest, tx: Sender<StreamEvent>) -> Box<dyn StreamGuard> {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        spawn_in_tokio(run_stream(request, tx, shutdown_rx));
        Box::new(WsGuard {
            shutdown: shutdown_tx,
        })
    }
}

struct WsGuard {
    shutdown: watch::Sender<bool>,
}

impl StreamGuard for WsGuard {
    fn close(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Connect and forward the server's pushes until shutdown or failure.
///
/// The protocol is push-only: nothing is written after the handshake, so
/// the write half is dropped immediately after the split.
async fn run_stream(
    request: StreamRequest,
    tx: Sender<StreamEvent>,
    mut shutdown: watch::Receiver<bool>,
) {
    let handle = request.handle;

    let ws = tokio::select! {
        res = tokio_tungstenite::connect_async(request.url.as_str()) => match res {
            Ok((ws, _response)) => ws,
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "stream connect failed");
                let _ = tx.send(StreamEvent::TransportError {
                    handle,
                    reason: e.to_string(),
                });
                return;
            }
        },
        // Replaced before the handshake completed; nobody is listening.
        _ = shutdown.changed() => return,
    };

    tracing::info!(url = %request.url, %handle, "stream opened");
    let _ = tx.send(StreamEvent::Opened { handle });

    let (_write, mut read) = ws.split();

    loop {
        tokio::select! {
            // Guard closed or dropped: drop the socket.
            _ = shutdown.changed() => break,
            item = read.next() => match item {
                Some(Ok(Message::Text(text))) => {
                    let _ = tx.send(StreamEvent::Message {
                        handle,
                        text: text.to_string(),
                    });
                }
                Some(Ok(Message::Close(_))) | None => {
                    let _ = tx.send(StreamEvent::Closed { handle });
                    return;
                }
                // Control frames carry no samples
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!(%handle, error = %e, "stream read failed");
                    let _ = tx.send(StreamEvent::TransportError {
                        handle,
                        reason: e.to_string(),
                    });
                    return;
                }
            },
        }
    }

    tracing::debug!(%handle, "stream torn down");
}
