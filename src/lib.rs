//! Storyline: story trees from kanban board cards.
//!
//! This crate turns a flat snapshot of board cards into a forest of issues
//! and nested stories. Card names follow a compact grammar that carries an
//! identifier, effort estimates, a parent reference, and dependency links;
//! list names may encode a dated sprint.
//!
//! # Architecture
//!
//! Storyline follows hexagonal architecture principles:
//!
//! - **Domain**: Grammars and node types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for fetching board snapshots
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`story`]: Card parsing, assembly, and forest construction

pub mod story;
