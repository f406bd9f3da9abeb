//! Tree formatting and display
//!
//! This module provides renderers for both tree shapes the crate
//! handles:
//!
//! - `config` - render options
//! - `tree` - folder-tree formatter (markdown string and colored console)
//! - `object` - object-tree renderer for parsed JSON/YAML documents
//! - `json` - JSON export of the built tree

mod config;
mod json;
mod object;
mod tree;

pub use config::RenderOptions;
pub use json::print_json;
pub use object::{DocumentFormat, ObjectOptions, render_object_tree};
pub use tree::TreeFormatter;
