use std::fs;
use std::path::Path;

use crate::parsers::newick::NewickParseError;
use crate::parsers::newick::parse_newick;
use crate::parsers::newick::write_newick;
use crate::phylo::node::Node;

/// Reads a NEWICK file and parses every tree in it. The file must be UTF-8.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Node>, NewickParseError> {
    let text = fs::read_to_string(path)?;
    parse_newick(&text)
}

/// Writes trees to a file as one NEWICK document; see [write_newick].
pub fn write(
    path: impl AsRef<Path>,
    trees: &[Node],
) -> Result<(), NewickParseError> {
    fs::write(path, write_newick(trees))?;
    Ok(())
}
