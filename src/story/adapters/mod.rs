//! Adapter implementations for story ports.

pub mod memory;
