//! Bottom-up folder size aggregation

use super::node::Node;

/// Sum file sizes through the tree, recording each folder's total in
/// its `aggregate_size` field.
///
/// Returns the total for the node passed in, so calling this on the
/// root yields the grand total. Sums saturate rather than wrap on the
/// (pathological) overflow of `u64`.
pub fn aggregate_sizes(node: &mut Node) -> u64 {
    match node {
        Node::File { size } => *size,
        Node::Folder {
            children,
            aggregate_size,
        } => {
            let mut sum: u64 = 0;
            for child in children.values_mut() {
                sum = sum.saturating_add(aggregate_sizes(child));
            }
            *aggregate_size = Some(sum);
            sum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FlatEntry, build_file_tree};

    fn folder_total(node: &Node) -> Option<u64> {
        match node {
            Node::Folder { aggregate_size, .. } => *aggregate_size,
            Node::File { .. } => None,
        }
    }

    fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
        match node {
            Node::Folder { children, .. } => &children[name],
            Node::File { .. } => panic!("{} is not a folder", name),
        }
    }

    #[test]
    fn test_sums_nested_folders() {
        let mut tree = build_file_tree(&[
            FlatEntry::new("app/src/main.rs", 100),
            FlatEntry::new("app/src/lib.rs", 200),
            FlatEntry::new("app/README.md", 50),
        ]);

        let total = aggregate_sizes(&mut tree.root);
        assert_eq!(total, 350);

        let app = child(&tree.root, "app");
        assert_eq!(folder_total(app), Some(350));
        assert_eq!(folder_total(child(app, "src")), Some(300));
    }

    #[test]
    fn test_empty_folder_aggregates_to_zero() {
        let mut node = Node::folder();
        assert_eq!(aggregate_sizes(&mut node), 0);
        assert_eq!(folder_total(&node), Some(0));
    }

    #[test]
    fn test_file_contributes_its_size_without_annotation() {
        let mut node = Node::File { size: 77 };
        assert_eq!(aggregate_sizes(&mut node), 77);
    }

    #[test]
    fn test_no_precision_loss_at_i64_max() {
        let half = (u64::MAX / 2) / 2; // 2^62 - 1, rounded down
        let mut tree = build_file_tree(&[
            FlatEntry::new("big/a.bin", half),
            FlatEntry::new("big/b.bin", half),
            FlatEntry::new("big/c.bin", 1),
        ]);

        let total = aggregate_sizes(&mut tree.root);
        assert_eq!(total, u64::MAX / 2); // exactly 2^63 - 1
        assert_eq!(folder_total(child(&tree.root, "big")), Some(u64::MAX / 2));
    }

    #[test]
    fn test_overflow_saturates_instead_of_wrapping() {
        let mut tree = build_file_tree(&[
            FlatEntry::new("x/a", u64::MAX),
            FlatEntry::new("x/b", u64::MAX),
        ]);
        assert_eq!(aggregate_sizes(&mut tree.root), u64::MAX);
    }
}
