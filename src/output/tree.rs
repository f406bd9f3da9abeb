//! Folder-tree formatter
//!
//! `TreeFormatter::format` produces the canonical markdown string; one
//! entry per line, `\n`-terminated, no trailing blank line. `print`
//! writes the identical layout to stdout with colors for interactive
//! use.

use std::collections::BTreeMap;
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::size::format_bytes;
use crate::tree::{FileTree, Node};

use super::config::RenderOptions;

/// Renders a built (and aggregated) tree into `tree`-command-style
/// markdown.
pub struct TreeFormatter {
    options: RenderOptions,
}

impl TreeFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the tree to a markdown string.
    pub fn format(&self, tree: &FileTree) -> String {
        let mut out = String::new();
        if let Node::Folder { children, .. } = &tree.root {
            self.format_level(children, &mut out, "", true);
        }
        out
    }

    /// Print the tree to stdout, folders in bold blue.
    pub fn print(&self, tree: &FileTree, use_color: bool) -> io::Result<()> {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Node::Folder { children, .. } = &tree.root {
            self.print_level(children, &mut stdout, "", true)?;
        }
        Ok(())
    }

    /// Children of one folder in render order: folders before files,
    /// then ascending ordinal order of the decorated key within each
    /// kind.
    fn sorted_children(children: &BTreeMap<String, Node>) -> Vec<(String, &Node)> {
        let mut entries: Vec<(String, &Node)> = children
            .iter()
            .map(|(name, node)| (node.decorated_key(name), node))
            .collect();
        entries.sort_by(|(key_a, a), (key_b, b)| {
            b.is_folder()
                .cmp(&a.is_folder())
                .then_with(|| key_a.cmp(key_b))
        });
        entries
    }

    fn size_suffix(&self, node: &Node) -> Option<String> {
        if !self.options.show_file_size {
            return None;
        }
        match node {
            Node::File { size } => Some(format!(" ({})", format_bytes(*size))),
            Node::Folder {
                aggregate_size: Some(total),
                ..
            } => Some(format!(" ({})", format_bytes(*total))),
            // Never aggregated: omit the suffix rather than guess.
            Node::Folder {
                aggregate_size: None,
                ..
            } => None,
        }
    }

    fn format_level(
        &self,
        children: &BTreeMap<String, Node>,
        out: &mut String,
        indent: &str,
        is_root: bool,
    ) {
        let entries = Self::sorted_children(children);
        let count = entries.len();

        for (index, (key, node)) in entries.into_iter().enumerate() {
            let is_last = index + 1 == count;

            if !is_root {
                out.push_str(indent);
                out.push_str(if is_last { "└── " } else { "├── " });
            }
            out.push_str(&key);
            if let Some(suffix) = self.size_suffix(node) {
                out.push_str(&suffix);
            }
            out.push('\n');

            if let Node::Folder { children, .. } = node {
                let deeper = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", indent)
                } else {
                    format!("{}│   ", indent)
                };
                self.format_level(children, out, &deeper, false);
            }
        }
    }

    fn print_level(
        &self,
        children: &BTreeMap<String, Node>,
        stdout: &mut StandardStream,
        indent: &str,
        is_root: bool,
    ) -> io::Result<()> {
        let entries = Self::sorted_children(children);
        let count = entries.len();

        for (index, (key, node)) in entries.into_iter().enumerate() {
            let is_last = index + 1 == count;

            if !is_root {
                write!(stdout, "{}{}", indent, if is_last { "└── " } else { "├── " })?;
            }
            if node.is_folder() {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(stdout, "{}", key)?;
            stdout.reset()?;
            if let Some(suffix) = self.size_suffix(node) {
                write!(stdout, "{}", suffix)?;
            }
            writeln!(stdout)?;

            if let Node::Folder { children, .. } = node {
                let deeper = if is_root {
                    String::new()
                } else if is_last {
                    format!("{}    ", indent)
                } else {
                    format!("{}│   ", indent)
                };
                self.print_level(children, stdout, &deeper, false)?;
            }
        }
        Ok(())
    }
}
