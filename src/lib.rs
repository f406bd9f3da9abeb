//! Treemd - renders directory listings and parsed JSON/YAML documents as markdown trees

pub mod naming;
pub mod output;
pub mod scan;
pub mod size;
pub mod tree;

pub use naming::{detect_document, json_base_name, yaml_base_name};
pub use output::{
    DocumentFormat, ObjectOptions, RenderOptions, TreeFormatter, print_json, render_object_tree,
};
pub use scan::{ScanOptions, scan_directory};
pub use size::format_bytes;
pub use tree::{
    FALLBACK_ROOT_NAME, FileTree, FlatEntry, FolderTree, Node, aggregate_sizes, build_file_tree,
    build_sorted_tree, generate_folder_tree,
};
