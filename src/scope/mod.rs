mod extractor;

pub use extractor::extract;

use std::fmt;

/// Sibling-index address of a node within the scope tree, one index per
/// ancestor level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopePath(pub Vec<usize>);

impl ScopePath {
    /// Address of a direct child of this node
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        ScopePath(indices)
    }

    /// Nesting depth; the root container has depth 0
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "[{}]", joined)
    }
}

/// One node of the scope tree mirroring brace nesting
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeNode {
    /// Literal text that appeared at one nesting level
    Leaf {
        /// Address of this node within the tree
        path: ScopePath,

        /// The normalized text span
        text: String,
    },

    /// The contents of one additional level of braces
    Container {
        /// Address of this node within the tree
        path: ScopePath,

        /// Child nodes in encounter order; a leaf sibling immediately
        /// precedes the container holding what its trailing brace enclosed
        children: Vec<ScopeNode>,
    },
}

impl ScopeNode {
    /// The address of this node
    pub fn path(&self) -> &ScopePath {
        match self {
            ScopeNode::Leaf { path, .. } => path,
            ScopeNode::Container { path, .. } => path,
        }
    }

    /// Leaf text, if this node is a leaf
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            ScopeNode::Leaf { text, .. } => Some(text),
            ScopeNode::Container { .. } => None,
        }
    }

    /// Child nodes, if this node is a container
    pub fn children(&self) -> Option<&[ScopeNode]> {
        match self {
            ScopeNode::Leaf { .. } => None,
            ScopeNode::Container { children, .. } => Some(children),
        }
    }

    /// True for a leaf with no text or a container with no children
    pub fn is_empty(&self) -> bool {
        match self {
            ScopeNode::Leaf { text, .. } => text.is_empty(),
            ScopeNode::Container { children, .. } => children.is_empty(),
        }
    }

    /// All leaf texts of the subtree in tree order
    pub fn leaf_texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ScopeNode::Leaf { text, .. } => out.push(text),
            ScopeNode::Container { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Number of container nodes in the subtree, the root excluded
    pub fn container_count(&self) -> usize {
        match self {
            ScopeNode::Leaf { .. } => 0,
            ScopeNode::Container { children, .. } => children
                .iter()
                .map(|c| match c {
                    ScopeNode::Leaf { .. } => 0,
                    ScopeNode::Container { .. } => 1 + c.container_count(),
                })
                .sum(),
        }
    }
}
