//! Path-tree construction, aggregation, and the one-call pipeline
//!
//! - `node` - flat entries and the tagged tree node type
//! - `builder` - nested tree construction from flat paths
//! - `aggregate` - bottom-up folder size totals
//! - `generate` - sort + build + aggregate + render in one call

mod aggregate;
mod builder;
mod generate;
mod node;

pub use aggregate::aggregate_sizes;
pub use builder::{FALLBACK_ROOT_NAME, build_file_tree};
pub use generate::{FolderTree, build_sorted_tree, generate_folder_tree};
pub use node::{FileTree, FlatEntry, Node};
