use log::trace;

use super::{ScopeNode, ScopePath};
use crate::lex::{self, Token};

/// Build the scope tree for a token stream.
///
/// Brace tokens become +1/-1 events; integrating the event stream with a
/// counter stack yields the hierarchical address of every span between
/// consecutive events. Unbalanced braces degrade to a partial tree, never
/// an error: a close below the global level is clamped, an unterminated
/// open leaves a truncated subtree.
pub fn extract(tokens: &[Token]) -> ScopeNode {
    let events = derive_braces(tokens);
    let paths = integrate_paths(&events, tokens.len());
    fulfill_paths(tokens, &paths)
}

/// Indices of brace tokens tagged with their nesting direction
fn derive_braces(tokens: &[Token]) -> Vec<(usize, i32)> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, t)| match t {
            Token::Open => Some((i, 1)),
            Token::Close => Some((i, -1)),
            _ => None,
        })
        .collect()
}

/// Integrate brace events into one hierarchical address per span.
///
/// One counter per open nesting depth: entering a new depth pushes a zero
/// counter and bumps the parent (descending is itself the next sibling of
/// the parent level); re-visiting a depth bumps its counter and discards
/// stale deeper counters. The address recorded at an event names the span
/// of text since the previous event. A synthetic terminal event flushes
/// the trailing span.
fn integrate_paths(events: &[(usize, i32)], token_count: usize) -> Vec<(usize, ScopePath)> {
    let mut level = 0usize;
    let mut stack: Vec<usize> = Vec::new();
    let mut paths = Vec::with_capacity(events.len() + 1);

    let terminal = (token_count, -1);
    for &(index, delta) in events.iter().chain(std::iter::once(&terminal)) {
        if stack.len() == level {
            if level > 0 {
                stack[level - 1] += 1;
            }
            stack.push(0);
        } else {
            stack[level] += 1;
            stack.truncate(level + 1);
        }

        paths.push((index, ScopePath(stack[..=level].to_vec())));

        if delta > 0 {
            level += 1;
        } else {
            // more closes than opens: stay at the global level
            level = level.saturating_sub(1);
        }
    }

    paths
}

/// Slice the token stream between consecutive events and store each span
/// at its recorded address, materializing empty containers for ancestors
/// that have no span of their own.
fn fulfill_paths(tokens: &[Token], paths: &[(usize, ScopePath)]) -> ScopeNode {
    let mut children = Vec::new();
    let mut previous: Option<usize> = None;

    for (index, path) in paths {
        let from = previous.map(|p| p + 1).unwrap_or(0);
        let span = lex::render(&tokens[from..*index]);
        trace!("span {} = {:?}", path, span);
        assign_path(&mut children, &path.0, path, span);
        previous = Some(*index);
    }

    ScopeNode::Container {
        path: ScopePath::default(),
        children,
    }
}

/// Place `text` at the tree position named by `path`, creating empty
/// intermediate containers as needed so every ancestor exists.
fn assign_path(children: &mut Vec<ScopeNode>, path: &[usize], full_path: &ScopePath, text: String) {
    let Some((&last, ancestors)) = path.split_last() else {
        return;
    };

    let mut current = children;
    for (depth, &index) in ancestors.iter().enumerate() {
        pad_with_containers(current, index, &full_path.0[..depth]);
        current = match &mut current[index] {
            ScopeNode::Container { children, .. } => children,
            // a leaf where a container is addressed means the input was
            // malformed; keep what we have
            ScopeNode::Leaf { .. } => return,
        };
    }

    pad_with_containers(current, last, &full_path.0[..path.len() - 1]);
    current[last] = ScopeNode::Leaf {
        path: full_path.clone(),
        text,
    };
}

fn pad_with_containers(children: &mut Vec<ScopeNode>, index: usize, prefix: &[usize]) {
    while children.len() <= index {
        let mut indices = prefix.to_vec();
        indices.push(children.len());
        children.push(ScopeNode::Container {
            path: ScopePath(indices),
            children: Vec::new(),
        });
    }
}
