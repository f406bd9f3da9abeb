//! Render configuration types

/// Configuration for folder-tree rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Append human-readable sizes to files and folders.
    pub show_file_size: bool,
}
