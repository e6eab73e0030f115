//! Declarative folder layouts and their reconciliation with the disk.
//!
//! A layout is a tree of [`FolderNode`]s built once and never mutated.
//! [`find_missing`] diffs it against a base directory and
//! [`create_missing`] creates what the diff reports.

mod default_tree;
mod sync;
mod tree;

pub use default_tree::build_default_tree;
pub use sync::{FolderSyncError, create_missing, find_missing, sync};
pub use tree::{FolderNode, InvalidSpecError};
