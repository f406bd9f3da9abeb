//! Object-tree rendering for parsed JSON/YAML documents
//!
//! Shares the box-drawing conventions of the folder-tree formatter but
//! walks an arbitrary parsed document instead of a built path tree.
//! Map keys keep the document's own order (serde_json is compiled with
//! `preserve_order`); array elements render as `[index]`.

use serde_json::Value;

/// Source document format; labels the header line and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

/// Options for object-tree rendering.
#[derive(Debug, Clone)]
pub struct ObjectOptions {
    pub root_name: String,
    pub format: DocumentFormat,
}

/// Render a parsed document as a markdown tree.
///
/// The output opens with a `<root_name>.<format>` header line, except
/// when the whole document is a bare primitive, which renders as a
/// single line with no header.
pub fn render_object_tree(value: &Value, options: &ObjectOptions) -> String {
    let mut out = String::new();

    if is_container(value) {
        out.push_str(&options.root_name);
        out.push('.');
        out.push_str(options.format.label());
        out.push('\n');
        render_container(value, &mut out, "");
    } else {
        out.push_str(&format_primitive(value));
        out.push('\n');
    }

    out
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn render_container(value: &Value, out: &mut String, indent: &str) {
    match value {
        Value::Array(items) => {
            let count = items.len();
            for (index, item) in items.iter().enumerate() {
                let label = format!("[{}]", index);
                render_child(&label, item, out, indent, index + 1 == count);
            }
        }
        Value::Object(map) => {
            let count = map.len();
            for (index, (key, item)) in map.iter().enumerate() {
                render_child(key, item, out, indent, index + 1 == count);
            }
        }
        _ => {}
    }
}

fn render_child(label: &str, value: &Value, out: &mut String, indent: &str, is_last: bool) {
    out.push_str(indent);
    out.push_str(if is_last { "└── " } else { "├── " });
    out.push_str(label);

    if is_container(value) {
        out.push('\n');
        let deeper = format!("{}{}", indent, if is_last { "    " } else { "│   " });
        render_container(value, out, &deeper);
    } else {
        out.push_str(": ");
        out.push_str(&format_primitive(value));
        out.push('\n');
    }
}

/// Strings are double-quoted verbatim; embedded quotes or newlines are
/// not escaped, which can visually break a tree line. Known limitation,
/// kept as documented behavior.
fn format_primitive(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}
