//! StreamStatus - Connection State of the Telemetry Stream

/// Connection state for the single active stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamStatus {
    /// No session requested yet, or stopped by the user
    #[default]
    Idle,
    /// Connection attempt in flight
    Connecting,
    /// Handshake acknowledged, samples flowing
    Connected,
    /// Transport failed or the server closed the stream
    Disconnected,
}

impl StreamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StreamStatus::Idle => "Idle",
            StreamStatus::Connecting => "Connecting",
            StreamStatus::Connected => "Connected",
            StreamStatus::Disconnected => "Disconnected",
        }
    }

    /// Whether a session is currently running (a further start is ignored)
    pub fn is_streaming(&self) -> bool {
        matches!(self, StreamStatus::Connecting | StreamStatus::Connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streaming_states() {
        assert!(!StreamStatus::Idle.is_streaming());
        assert!(StreamStatus::Connecting.is_streaming());
        assert!(StreamStatus::Connected.is_streaming());
        assert!(!StreamStatus::Disconnected.is_streaming());
    }
}
