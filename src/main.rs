//! CLI entry point for treemd

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use serde_json::Value;
use treemd::{
    DocumentFormat, FlatEntry, ObjectOptions, RenderOptions, ScanOptions, TreeFormatter,
    build_sorted_tree, detect_document, generate_folder_tree, print_json, render_object_tree,
    scan_directory,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treemd")]
#[command(about = "Render directories and JSON/YAML documents as markdown trees")]
#[command(version)]
struct Args {
    /// Directory to render, or a .json/.yaml/.yml document
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show file and folder sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Include hidden and ignore-listed files
    #[arg(short, long)]
    all: bool,

    /// Exclude entries whose name matches PATTERN (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Read a JSON manifest of {path, size} records instead of walking a directory
    #[arg(long = "from-list", value_name = "FILE")]
    from_list: Option<PathBuf>,

    /// Write markdown to FILE (defaults to <root>.md when FILE is omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE", num_args = 0..=1)]
    output: Option<Option<PathBuf>>,

    /// Output the built tree as JSON instead of markdown
    #[arg(long = "json", conflicts_with = "output")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("treemd: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> io::Result<()> {
    // A .json/.yaml file argument switches to document mode.
    if args.from_list.is_none() && args.path.is_file() {
        let file_name = args
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some((root_name, format)) = detect_document(&file_name) else {
            return Err(other(format!(
                "'{}' is neither a directory nor a JSON/YAML document",
                args.path.display()
            )));
        };
        if args.json {
            return Err(other("--json applies to directory input"));
        }
        let markdown = render_document(&args.path, &root_name, format)?;
        return deliver(&markdown, &root_name, args);
    }

    let entries = if let Some(manifest) = &args.from_list {
        read_manifest(manifest)?
    } else {
        let root = resolve_root(&args.path);
        if !root.is_dir() {
            return Err(other(format!(
                "cannot access '{}': No such file or directory",
                args.path.display()
            )));
        }
        scan_directory(
            &root,
            &ScanOptions {
                show_all: args.all,
                exclude: args.exclude.clone(),
            },
        )
    };

    let options = RenderOptions {
        show_file_size: args.size,
    };

    if args.json {
        let tree = build_sorted_tree(&entries);
        return print_json(&tree);
    }

    // Interactive terminals get the colored rendering; everything else
    // gets the canonical markdown bytes.
    if args.output.is_none() && should_use_color(args.color) {
        let tree = build_sorted_tree(&entries);
        return TreeFormatter::new(options).print(&tree, true);
    }

    let result = generate_folder_tree(&entries, &options);
    deliver(&result.markdown, &result.root_name, args)
}

/// Make relative roots absolute so the scanned directory's real base
/// name (not ".") becomes the leading path segment.
fn resolve_root(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

fn read_manifest(path: &Path) -> io::Result<Vec<FlatEntry>> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| {
        other(format!("invalid manifest '{}': {}", path.display(), e))
    })
}

fn render_document(path: &Path, root_name: &str, format: DocumentFormat) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    let value: Value = match format {
        DocumentFormat::Json => serde_json::from_str(&text)
            .map_err(|e| other(format!("invalid JSON in '{}': {}", path.display(), e)))?,
        DocumentFormat::Yaml => serde_yaml::from_str(&text)
            .map_err(|e| other(format!("invalid YAML in '{}': {}", path.display(), e)))?,
    };
    Ok(render_object_tree(
        &value,
        &ObjectOptions {
            root_name: root_name.to_string(),
            format,
        },
    ))
}

/// Print to stdout, or write to the requested file; `-o` without a
/// name derives one from the root name.
fn deliver(markdown: &str, root_name: &str, args: &Args) -> io::Result<()> {
    match &args.output {
        Some(given) => {
            let file = given
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{}.md", root_name)));
            fs::write(&file, markdown)
        }
        None => {
            print!("{}", markdown);
            Ok(())
        }
    }
}

fn other(message: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message.into())
}
