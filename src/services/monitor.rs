//! Stream Monitor
//!
//! Central owner of the telemetry session: the connection lifecycle state
//! machine, the chart window, the reading log, and the derived display
//! values. The display layer only ever reads snapshots; all mutation
//! happens here, one event at a time, so no locking is needed.

use crate::domain::config::{AppConfig, CadenceConfig};
use crate::domain::sample::TemperatureSample;
use crate::error::Result;
use crate::services::events::{StreamEvent, StreamHandle, StreamRequest};
use crate::services::transport::{StreamGuard, Transport};
use crate::state::chart_state::ChartState;
use crate::state::connection_state::StreamStatus;
use crate::state::log_state::ReadingLog;
use crate::state::reading_state::{CurrentReading, Trend};
use crossbeam_channel::{Receiver, Sender};

/// The currently held connection
struct ActiveStream {
    handle: StreamHandle,
    guard: Box<dyn StreamGuard>,
}

/// Owns the single telemetry stream and every store derived from it
pub struct StreamMonitor {
    transport: Box<dyn Transport>,
    config: AppConfig,
    cadence: CadenceConfig,
    status: StreamStatus,
    /// At most one live connection at any instant
    active: Option<ActiveStream>,
    next_handle: u64,
    tx: Sender<StreamEvent>,
    rx: Receiver<StreamEvent>,
    chart: ChartState,
    log: ReadingLog,
    reading: CurrentReading,
}

impl StreamMonitor {
    pub fn new(config: AppConfig, transport: Box<dyn Transport>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            transport,
            config,
            cadence: CadenceConfig::default(),
            status: StreamStatus::Idle,
            active: None,
            next_handle: 0,
            tx,
            rx,
            chart: ChartState::new(),
            log: ReadingLog::new(),
            reading: CurrentReading::default(),
        }
    }

    // ==================== Lifecycle ====================

    /// Start a session streaming one sample every `period_ms` milliseconds.
    ///
    /// Ignored while a session is already connecting or connected. The
    /// period is validated before any state changes; a previously held
    /// connection is closed before the new one is opened.
    pub fn start(&mut self, period_ms: u64) -> Result<()> {
        if self.status.is_streaming() {
            tracing::debug!(status = self.status.label(), "start ignored, session running");
            return Ok(());
        }

        let cadence = CadenceConfig::new(period_ms)?;

        self.close_active();
        self.cadence = cadence;

        self.next_handle += 1;
        let handle = StreamHandle(self.next_handle);
        let url = self.config.ws_url(cadence);

        tracing::info!(%url, %handle, "starting stream");
        self.status = StreamStatus::Connecting;
        let guard = self.transport.open(StreamRequest { url, handle }, self.tx.clone());
        self.active = Some(ActiveStream { handle, guard });

        Ok(())
    }

    /// Stop the session.
    ///
    /// Closes the connection if one is held and moves to `Idle`; leaves the
    /// status untouched when no connection is held.
    pub fn stop(&mut self) {
        if self.active.is_some() {
            self.close_active();
            self.status = StreamStatus::Idle;
            tracing::info!("stream stopped");
        }
    }

    /// Empty the chart and log buffers; independent of connection state.
    /// The current reading is left in place.
    pub fn clear(&mut self) {
        self.chart.clear();
        self.log.clear();
    }

    fn close_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.guard.close();
            tracing::debug!(handle = %active.handle, "closed previous connection");
        }
    }

    // ==================== Event ingestion ====================

    /// Drain every pending transport event. Returns the number applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    fn apply_event(&mut self, event: StreamEvent) {
        // Stale-handle guard: a replaced connection's residual events must
        // not touch the current session.
        let current = self.active.as_ref().map(|a| a.handle);
        if current != Some(event.handle()) {
            tracing::debug!(handle = %event.handle(), "ignoring stale connection event");
            return;
        }

        match event {
            StreamEvent::Opened { .. } => {
                self.status = StreamStatus::Connected;
                tracing::info!("stream connected");
            }

            StreamEvent::Message { text, .. } => self.ingest_message(&text),

            StreamEvent::TransportError { reason, .. } => {
                tracing::warn!(%reason, "stream transport failed");
                self.active = None;
                self.status = StreamStatus::Disconnected;
            }

            StreamEvent::Closed { .. } => {
                tracing::info!("stream closed by server");
                self.active = None;
                self.status = StreamStatus::Disconnected;
            }
        }
    }

    /// Decode one inbound message and fan it out into the stores.
    ///
    /// A malformed payload costs only that message: the session and the
    /// buffers are left exactly as they were.
    fn ingest_message(&mut self, text: &str) {
        let sample = match TemperatureSample::decode(text) {
            Ok(sample) => sample,
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed sample");
                return;
            }
        };

        self.reading.observe(sample.temperature);
        self.chart.push(&sample);
        self.log.prepend(&sample);
    }

    // ==================== Read surface ====================

    /// Current connection state
    pub fn status(&self) -> StreamStatus {
        self.status
    }

    /// Cadence of the most recently started session
    pub fn cadence(&self) -> CadenceConfig {
        self.cadence
    }

    /// Latest temperature, rounded for display; 0.0 before the first sample
    pub fn current_value(&self) -> f64 {
        self.reading.value()
    }

    /// Movement between the two newest chart points
    pub fn trend(&self) -> Trend {
        self.chart
            .latest_pair()
            .map(|(previous, latest)| Trend::between(previous.temperature, latest.temperature))
            .unwrap_or(Trend::Flat)
    }

    /// Chart-facing rolling window
    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    /// Panel-facing reading log
    pub fn log(&self) -> &ReadingLog {
        &self.log
    }

    // ==================== Event emission (for testing) ====================

    /// Emit a stream event as if the transport had produced it
    #[cfg(test)]
    fn emit(&self, event: StreamEvent) {
        let _ = self.tx.send(event);
    }
}

impl Drop for StreamMonitor {
    fn drop(&mut self) {
        self.close_active();
    }
}

impl std::fmt::Debug for StreamMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamMonitor")
            .field("status", &self.status)
            .field("window", &self.chart.len())
            .field("readings", &self.log.len())
            .finish()
    }
}
