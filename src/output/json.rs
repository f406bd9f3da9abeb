//! JSON export of the built tree

use std::io;

use crate::tree::FileTree;

/// Print the built tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &FileTree) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(tree).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
