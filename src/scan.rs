//! Directory scanning: turns a real directory into flat path entries
//!
//! The walk uses the `ignore` crate, so `.gitignore` and hidden-file
//! conventions apply unless `show_all` is set. Emitted paths are
//! `/`-joined and prefixed with the scanned directory's base name, so
//! the first segment of every entry names the root folder.

use std::path::Path;

use glob::Pattern;
use ignore::WalkBuilder;

use crate::tree::{FALLBACK_ROOT_NAME, FlatEntry};

/// Options controlling a directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Include hidden and ignore-listed files.
    pub show_all: bool,
    /// Name globs to exclude; matched against every path segment.
    pub exclude: Vec<String>,
}

/// Walk `root` and collect every readable file as a [`FlatEntry`].
///
/// Unreadable entries are skipped rather than reported; the `.git`
/// directory is always excluded.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Vec<FlatEntry> {
    let base = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_ROOT_NAME.to_string());

    let walker = if options.show_all {
        WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .build()
    } else {
        WalkBuilder::new(root).build()
    };

    let mut entries = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if path == root || !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if segments
            .iter()
            .any(|segment| segment == ".git" || is_excluded(segment, &options.exclude))
        {
            continue;
        }

        let size = path.metadata().map(|m| m.len()).unwrap_or(0);
        entries.push(FlatEntry::new(
            format!("{}/{}", base, segments.join("/")),
            size,
        ));
    }

    entries
}

fn is_excluded(name: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
