//! Builds a nested tree from flat path entries

use std::collections::BTreeMap;

use super::node::{FileTree, FlatEntry, Node};

/// Root name used when the input is empty or its first entry has no
/// directory component.
pub const FALLBACK_ROOT_NAME: &str = "directory_tree";

/// Build a nested tree from flat `(path, size)` entries.
///
/// Each path is split on `/`; intermediate segments become folders and
/// the final segment a file carrying the entry's size. The root name
/// is the first entry's leading segment when that entry has at least
/// two segments, otherwise [`FALLBACK_ROOT_NAME`].
///
/// Entry order matters for both the root name and collision
/// resolution, so callers wanting order-independent results sort
/// first ([`super::generate_folder_tree`] does).
pub fn build_file_tree(entries: &[FlatEntry]) -> FileTree {
    let root_name = entries
        .first()
        .and_then(|entry| {
            let mut segments = entry.path.split('/');
            let first = segments.next()?;
            segments.next().map(|_| first.to_string())
        })
        .unwrap_or_else(|| FALLBACK_ROOT_NAME.to_string());

    let mut children = BTreeMap::new();
    for entry in entries {
        insert_entry(&mut children, entry);
    }

    FileTree {
        root: Node::Folder {
            children,
            aggregate_size: None,
        },
        root_name,
    }
}

/// Walk or create the folder chain for one entry, then attach its file.
///
/// Collision policy: a name cannot be both file and folder, so a kind
/// conflict is resolved last-write-wins (the later entry's node kind
/// replaces the earlier one's). A duplicate file path keeps the first
/// recorded size.
fn insert_entry(root: &mut BTreeMap<String, Node>, entry: &FlatEntry) {
    let segments: Vec<&str> = entry.path.split('/').collect();
    let (file_name, folders) = segments
        .split_last()
        .expect("splitting a str always yields at least one segment");

    let mut current = root;
    for segment in folders {
        let child = current
            .entry((*segment).to_string())
            .or_insert_with(Node::folder);
        if !child.is_folder() {
            // A file held this name; the folder this path needs wins.
            *child = Node::folder();
        }
        current = match child {
            Node::Folder { children, .. } => children,
            Node::File { .. } => unreachable!("child was just made a folder"),
        };
    }

    // Same file listed twice: keep the first size seen. Anything else
    // occupying the name (a folder, or nothing) gives way to the file.
    if !matches!(current.get(*file_name), Some(Node::File { .. })) {
        current.insert((*file_name).to_string(), Node::File { size: entry.size });
    }
}
