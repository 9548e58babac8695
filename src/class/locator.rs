use log::{debug, trace};

use super::types::ClassEntry;
use crate::scope::ScopeNode;

/// Find class-shaped scopes in the tree and pair each with its name.
///
/// Duplicate class names keep their first position but take the last
/// body seen; a class scope with no recognized name leaf before it is
/// silently skipped.
pub fn locate(root: &ScopeNode) -> Vec<ClassEntry> {
    let Some(children) = root.children() else {
        return Vec::new();
    };

    let filtered = filter_siblings(children);

    // a hollow single-container level is the usual result of filtering a
    // namespace wrapper; collapse it so its siblings become visible
    let siblings = match filtered.as_slice() {
        [ScopeNode::Container { children, .. }] => children.clone(),
        _ => filtered,
    };

    collapse_classes(&siblings)
}

/// Pass 1: noise filtering (recursive, depth-first).
///
/// Leaf strings are reduced to a bare class name or nothing; a container
/// is traversed only when the sibling leaf before it filtered to empty,
/// since a non-empty preceding leaf means the container is itself a class
/// body whose internals stay flat. Empties are dropped and a container
/// left with a single child collapses down to that child.
fn filter_siblings(children: &[ScopeNode]) -> Vec<ScopeNode> {
    let mut cleaned: Vec<ScopeNode> = Vec::with_capacity(children.len());

    for (i, node) in children.iter().enumerate() {
        match node {
            ScopeNode::Leaf { path, text } => {
                let name = clean_candidate(text);
                trace!("leaf {} filtered to {:?}", path, name);
                cleaned.push(ScopeNode::Leaf {
                    path: path.clone(),
                    text: name,
                });
            }
            ScopeNode::Container { path, children } => {
                let preceded_by_name = i > 0 && !cleaned[i - 1].is_empty();
                if preceded_by_name {
                    // already identified as a class body; keep it intact
                    cleaned.push(node.clone());
                } else {
                    let inner = filter_siblings(children);
                    cleaned.push(match <[ScopeNode; 1]>::try_from(inner) {
                        Ok([single]) => single,
                        Err(rest) => ScopeNode::Container {
                            path: path.clone(),
                            children: rest,
                        },
                    });
                }
            }
        }
    }

    cleaned.retain(|node| !node.is_empty());
    cleaned
}

/// Pass 2: collapsing. A container immediately preceded by a non-empty
/// leaf registers one class: the leaf is the name, the body is the
/// `;`-joined text of the container's direct leaf children only.
fn collapse_classes(siblings: &[ScopeNode]) -> Vec<ClassEntry> {
    let mut entries: Vec<ClassEntry> = Vec::new();

    for (i, node) in siblings.iter().enumerate() {
        let ScopeNode::Container { children, .. } = node else {
            continue;
        };
        if i == 0 {
            continue;
        }
        let Some(name) = siblings[i - 1].leaf_text() else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let body = children
            .iter()
            .filter_map(ScopeNode::leaf_text)
            .collect::<Vec<_>>()
            .join(";");
        debug!("located class {:?}", name);

        // duplicate names: last body wins, first position kept
        match entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.body = body,
            None => entries.push(ClassEntry {
                name: name.to_string(),
                body,
            }),
        }
    }

    entries
}

/// Reduce one leaf string to a bare class name, or to nothing.
///
/// Only the fragment after the last `;` can introduce the scope that
/// follows; it must contain the `class` keyword, which is stripped along
/// with everything from the first isolated `:` onward (the base-class
/// list). `::` never counts as a section colon.
fn clean_candidate(text: &str) -> String {
    let tail = match text.rfind(';') {
        Some(pos) => &text[pos + 1..],
        None => text,
    };

    if !tail.contains("class") {
        return String::new();
    }

    let stripped = tail.replace("class", "");
    let name = match find_isolated_colon(&stripped) {
        Some(pos) => &stripped[..pos],
        None => &stripped,
    };
    name.trim().to_string()
}

/// Byte index of the first `:` that is not part of a `::` token
fn find_isolated_colon(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    text.match_indices(':').map(|(i, _)| i).find(|&i| {
        let prev_colon = i > 0 && bytes[i - 1] == b':';
        let next_colon = bytes.get(i + 1) == Some(&b':');
        !prev_colon && !next_colon
    })
}
