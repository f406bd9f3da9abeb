//! One-call pipeline from flat entries to rendered markdown

use crate::output::{RenderOptions, TreeFormatter};

use super::aggregate::aggregate_sizes;
use super::builder::build_file_tree;
use super::node::{FileTree, FlatEntry};

/// Rendered folder tree plus the root name inferred from the sorted
/// input. The root name feeds default export file names.
#[derive(Debug, Clone)]
pub struct FolderTree {
    pub markdown: String,
    pub root_name: String,
}

/// Sort entries, build the tree, and aggregate folder sizes.
///
/// The sort is by segment count ascending, then full path ascending;
/// it pins down which entry is "first" for root-name inference, so the
/// result does not depend on input order.
pub fn build_sorted_tree(entries: &[FlatEntry]) -> FileTree {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.path.cmp(&b.path)));

    let mut tree = build_file_tree(&sorted);
    aggregate_sizes(&mut tree.root);
    tree
}

/// Sort, build, aggregate, and render in one step.
pub fn generate_folder_tree(entries: &[FlatEntry], options: &RenderOptions) -> FolderTree {
    let tree = build_sorted_tree(entries);
    let markdown = TreeFormatter::new(options.clone()).format(&tree);

    FolderTree {
        markdown,
        root_name: tree.root_name,
    }
}
