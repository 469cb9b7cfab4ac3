//! Service Layer
//!
//! Owns the connection lifecycle and bridges the async WebSocket transport
//! to the synchronous state stores.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      StreamMonitor                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐   │
//! │  │  Transport   │  │ StreamStatus │  │  stale-handle    │   │
//! │  │ (WebSocket)  │  │   machine    │  │     guard        │   │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ StreamEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       State Layer                            │
//! │            (ChartState, ReadingLog, CurrentReading)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod events;
mod monitor;
mod runtime;
mod transport;

pub use events::*;
pub use monitor::*;
pub use runtime::*;
pub use transport::*;
