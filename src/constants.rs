//! Core Constants
//!
//! Centralized capacities and timing constants for the streaming core.

/// Number of samples retained by the chart's rolling window
pub const CHART_WINDOW_CAPACITY: usize = 120;

/// Lowest cadence the client accepts (sub-second streaming is rejected)
pub const MIN_PERIOD_MS: u64 = 1000;

/// Highest cadence the server honors; larger values fall back to its default
pub const MAX_PERIOD_MS: u64 = 60000;

/// Default inter-sample period requested from the server
pub const DEFAULT_PERIOD_MS: u64 = 1000;

/// Interval at which the binary drains pending stream events
pub const PUMP_INTERVAL_MS: u64 = 100;
