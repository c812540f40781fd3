//! Port contracts for story synchronisation.
//!
//! Ports define infrastructure-agnostic interfaces used by story services.

pub mod board_source;

pub use board_source::{BoardSource, BoardSourceError, BoardSourceResult};
