use crate::phylo::node::Node;
use crate::phylo::node::NodeError;
use thiserror::Error;

/// Maximum nesting depth accepted by [parse_node] and [parse_newick].
///
/// Parsing descends one call level per parenthesis pair, so unbounded input
/// could otherwise exhaust the call stack. Use [parse_node_with_limit] or
/// [parse_newick_with_limit] when deeper trees are expected.
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Length cap for the input excerpt carried by parse errors.
const ERROR_PREFIX_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum NewickParseError {
    #[error("unmatched parentheses: {prefix:?}")]
    UnmatchedParens { prefix: String },
    #[error("tree nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
    #[error(transparent)]
    Node(#[from] NodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses NEWICK formatted text into [Node] trees.
///
/// The document is split on `;`; blank segments (leading, trailing or
/// interleaved) are discarded and every remaining segment is parsed as one
/// tree. A document may therefore hold zero or more trees, and `""` or
/// `";;"` both yield an empty list.
pub fn parse_newick(s: &str) -> Result<Vec<Node>, NewickParseError> {
    parse_newick_with_limit(s, DEFAULT_DEPTH_LIMIT)
}

/// Same as [parse_newick], with an explicit nesting depth limit.
pub fn parse_newick_with_limit(
    s: &str,
    depth_limit: usize,
) -> Result<Vec<Node>, NewickParseError> {
    let mut trees: Vec<Node> = Vec::new();
    for tree_string in s.split(';') {
        let tree_string = tree_string.trim();
        if tree_string.is_empty() {
            continue;
        }
        trees.push(parse_node_with_limit(tree_string, depth_limit)?);
    }
    Ok(trees)
}

/// Parses a single NEWICK tree, given without a trailing semicolon.
pub fn parse_node(s: &str) -> Result<Node, NewickParseError> {
    parse_node_with_limit(s, DEFAULT_DEPTH_LIMIT)
}

/// Same as [parse_node], with an explicit nesting depth limit.
pub fn parse_node_with_limit(
    s: &str,
    depth_limit: usize,
) -> Result<Node, NewickParseError> {
    parse_node_at_depth(s, 0, depth_limit)
}

/// Recursive descent over the text span of one node.
///
/// The span either holds no `)` at all, in which case it is a leaf label,
/// or it must open with `(`; the text after the final `)` is the node's own
/// label and the text in between is the comma separated sibling list. The
/// current nesting depth is carried so parsing can refuse input nested more
/// deeply than `depth_limit` instead of overflowing the call stack.
fn parse_node_at_depth(
    s: &str,
    depth: usize,
    depth_limit: usize,
) -> Result<Node, NewickParseError> {
    if depth > depth_limit {
        return Err(NewickParseError::DepthLimitExceeded {
            limit: depth_limit,
        });
    }

    let s = s.trim();

    let (descendants_text, label) = match s.rsplit_once(')') {
        None => (None, s),
        Some((head, label)) => {
            if !head.starts_with('(') {
                return Err(NewickParseError::UnmatchedParens {
                    prefix: error_prefix(s),
                });
            }
            (Some(&head[1..]), label)
        }
    };

    let mut children: Vec<Node> = Vec::new();
    if let Some(descendants_text) = descendants_text {
        for sibling in split_siblings(descendants_text) {
            children.push(parse_node_at_depth(
                sibling,
                depth + 1,
                depth_limit,
            )?);
        }
    }

    let (name, length) = split_label(label);
    Ok(Node::new(name, length, children)?)
}

/// Splits a sibling list at top level commas only.
///
/// A comma ends the current sibling exactly when the running parenthesis
/// depth is zero; commas inside an inner pair belong to a nested sibling
/// list. The text after the last comma (or the whole text when there is no
/// comma) is always the final sibling, even when empty.
fn split_siblings(s: &str) -> Vec<&str> {
    let mut siblings: Vec<&str> = Vec::new();
    let mut depth: i64 = 0;
    let mut start: usize = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                siblings.push(&s[start..i]);
                start = i + 1;
            }
            _ => (),
        }
    }
    siblings.push(&s[start..]);
    siblings
}

/// Splits a raw node label on the first `:` into name and branch length.
/// Either half becomes absent when empty; with no `:` the whole label is
/// the name.
fn split_label(label: &str) -> (Option<&str>, Option<&str>) {
    match label.split_once(':') {
        Some((name, length)) => (non_empty(name), non_empty(length)),
        None => (non_empty(label), None),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    match s {
        "" => None,
        s => Some(s),
    }
}

/// Bounded excerpt of the text before the first `)`, for diagnostics.
fn error_prefix(s: &str) -> String {
    let prefix = match s.find(')') {
        Some(i) => &s[..i],
        None => s,
    };
    prefix.chars().take(ERROR_PREFIX_LIMIT).collect()
}

/// Writes trees as one NEWICK document.
///
/// Trees are joined with `;\n` and the document always ends with a single
/// trailing `;` — also for a single tree, and for an empty list the result
/// is just `";"`.
pub fn write_newick(trees: &[Node]) -> String {
    let mut newick = trees
        .iter()
        .map(Node::to_newick)
        .collect::<Vec<String>>()
        .join(";\n");
    newick.push(';');
    newick
}
