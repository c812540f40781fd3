//! In-memory adapters.

mod board_source;

pub use board_source::InMemoryBoardSource;
