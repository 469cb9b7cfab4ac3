//! Thermowatch Client Core
//!
//! This crate provides the streaming core of a live temperature monitor:
//! connection lifecycle, sample decoding, chart/log buffering, and the
//! derived display values a rendering layer reads.

pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;
