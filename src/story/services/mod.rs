//! Application services for story assembly and synchronisation.

mod assembler;
mod sync;
mod tree;

pub use assembler::StoryAssembler;
pub use sync::{StorySync, StorySyncError, StorySyncResult, StorySyncService};
pub use tree::{StoryForest, build_forest};
