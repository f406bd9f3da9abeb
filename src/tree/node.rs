//! Node types for path-based trees

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One file record before tree structuring: a `/`-joined path and a
/// size in bytes. Produced by the directory scanner or read from a
/// JSON manifest; immutable for the duration of one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub path: String,
    pub size: u64,
}

impl FlatEntry {
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Number of `/`-separated segments in the path.
    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }
}

/// A node in the built tree.
///
/// Children are keyed by raw segment name, so a name is either a file
/// or a folder at a given position, never both. A folder's
/// `aggregate_size` is `None` until `aggregate_sizes` has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        size: u64,
    },
    Folder {
        children: BTreeMap<String, Node>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aggregate_size: Option<u64>,
    },
}

impl Node {
    /// An empty, un-aggregated folder.
    pub fn folder() -> Self {
        Node::Folder {
            children: BTreeMap::new(),
            aggregate_size: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    /// The key as it appears in rendered output: folders carry a
    /// trailing slash, files render bare.
    pub fn decorated_key(&self, name: &str) -> String {
        match self {
            Node::Folder { .. } => format!("{}/", name),
            Node::File { .. } => name.to_string(),
        }
    }
}

/// A built (and possibly aggregated) tree plus the root folder name
/// inferred from its input.
#[derive(Debug, Clone, Serialize)]
pub struct FileTree {
    pub root: Node,
    pub root_name: String,
}
