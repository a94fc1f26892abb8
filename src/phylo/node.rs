use std::fmt::Display;
use thiserror::Error;

/// Characters that carry structural meaning in NEWICK text and therefore
/// cannot appear inside unquoted names or branch lengths.
pub(crate) const RESERVED_PUNCTUATION: [char; 5] = [':', ';', ',', '(', ')'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("node names and branch lengths must not contain {reserved:?}: {value:?}")]
    InvalidLabel { value: String, reserved: char },
}

/// A single node of a rooted phylogenetic tree.
///
/// Each node owns its children outright, so a [Node] is the whole subtree
/// rooted at it and the tree is guaranteed to be acyclic with every child
/// attached to exactly one parent. Branch lengths are kept as the raw text
/// found in the input so that writing a parsed tree reproduces it verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Node {
    name: Option<String>,
    length: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Builds a node from an optional name, an optional branch length and a
    /// list of child nodes. Empty strings are treated as absent. Fails if the
    /// name or the branch length contains reserved punctuation.
    pub fn new(
        name: Option<&str>,
        length: Option<&str>,
        children: Vec<Node>,
    ) -> Result<Self, NodeError> {
        let name = normalize_label(name);
        let length = normalize_label(length);

        if let Some(name) = &name {
            validate_label(name)?;
        }
        if let Some(length) = &length {
            validate_label(length)?;
        }

        Ok(Self { name, length, children })
    }

    /// Builds a childless node.
    pub fn leaf(
        name: Option<&str>,
        length: Option<&str>,
    ) -> Result<Self, NodeError> {
        Self::new(name, length, Vec::new())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn length(&self) -> Option<&str> {
        self.length.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Writes this subtree as NEWICK text, without a trailing semicolon.
    ///
    /// Children are written first, comma separated and parenthesized; the
    /// node's own label follows, with `:length` appended when a branch
    /// length is present. A leaf is just its label. The output parses back
    /// to an equal node; see [crate::parse_node].
    pub fn to_newick(&self) -> String {
        let mut label = String::new();
        if let Some(name) = &self.name {
            label.push_str(name);
        }
        if let Some(length) = &self.length {
            label.push(':');
            label.push_str(length);
        }

        if self.children.is_empty() {
            return label;
        }

        let descendants: Vec<String> =
            self.children.iter().map(Node::to_newick).collect();

        format!("({}){}", descendants.join(","), label)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_newick())
    }
}

fn normalize_label(label: Option<&str>) -> Option<String> {
    match label {
        None | Some("") => None,
        Some(label) => Some(label.to_string()),
    }
}

fn validate_label(label: &str) -> Result<(), NodeError> {
    if let Some(reserved) =
        label.chars().find(|c| RESERVED_PUNCTUATION.contains(c))
    {
        return Err(NodeError::InvalidLabel {
            value: label.to_string(),
            reserved,
        });
    }
    Ok(())
}
