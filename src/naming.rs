//! Base-name helpers for document root names
//!
//! The object-tree header shows the document's base name, so these
//! strip the format extension case-insensitively and nothing else.

use crate::output::DocumentFormat;

/// Strip a trailing `.json` extension, case-insensitively.
pub fn json_base_name(file_name: &str) -> &str {
    strip_suffix_ignore_case(file_name, &[".json"])
}

/// Strip a trailing `.yaml` or `.yml` extension, case-insensitively.
pub fn yaml_base_name(file_name: &str) -> &str {
    strip_suffix_ignore_case(file_name, &[".yaml", ".yml"])
}

/// Recognize a document file name by extension, returning its base
/// name and format. `None` for anything that is not JSON or YAML.
pub fn detect_document(file_name: &str) -> Option<(String, DocumentFormat)> {
    let base = json_base_name(file_name);
    if base.len() != file_name.len() {
        return Some((base.to_string(), DocumentFormat::Json));
    }
    let base = yaml_base_name(file_name);
    if base.len() != file_name.len() {
        return Some((base.to_string(), DocumentFormat::Yaml));
    }
    None
}

fn strip_suffix_ignore_case<'a>(name: &'a str, suffixes: &[&str]) -> &'a str {
    for suffix in suffixes {
        if name.len() >= suffix.len() {
            let split = name.len() - suffix.len();
            if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(suffix) {
                return &name[..split];
            }
        }
    }
    name
}
