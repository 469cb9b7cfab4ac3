//! Stream Events
//!
//! Uniform event type pushed by the transport layer and consumed by the
//! stream monitor. Every event carries the handle of the connection that
//! produced it, so residual traffic from a replaced connection can be
//! rejected instead of corrupting the current session.

/// Identity of one connection attempt
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct StreamHandle(pub u64);

impl std::fmt::Display for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Parameters for opening a stream
#[derive(Clone, Debug)]
pub struct StreamRequest {
    /// Fully-formed `ws://` URL including the period query parameter
    pub url: String,
    /// Handle the transport must tag its events with
    pub handle: StreamHandle,
}

/// Events emitted by the transport layer
#[derive(Clone, Debug)]
pub enum StreamEvent {
    /// Handshake acknowledged by the server
    Opened { handle: StreamHandle },

    /// One inbound text message
    Message { handle: StreamHandle, text: String },

    /// Transport-level failure, before or after open
    TransportError { handle: StreamHandle, reason: String },

    /// Orderly close of the stream
    Closed { handle: StreamHandle },
}

impl StreamEvent {
    /// Connection this event originated from
    pub fn handle(&self) -> StreamHandle {
        match self {
            StreamEvent::Opened { handle }
            | StreamEvent::Message { handle, .. }
            | StreamEvent::TransportError { handle, .. }
            | StreamEvent::Closed { handle } => *handle,
        }
    }
}
