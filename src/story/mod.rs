//! Story trees built from kanban board cards.
//!
//! Cards on the board carry encoded names such as `7: (2/5/3) Implement X #42`.
//! This module decodes those names, resolves members and sprints, and links
//! the results into a forest of issues and nested stories:
//!
//! - Domain types and grammars in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Assembly, tree building, and synchronisation in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
