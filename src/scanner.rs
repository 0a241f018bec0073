use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Path segment used for the unnamed document root. Object members use
/// their field name as segment, array elements their index.
pub const ROOT_SEGMENT: &str = "(root)";

/// Type of a JSON node seen by the scanner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    Text,
    Number,
    Bool,
    Null,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::String(_) => NodeKind::Text,
            Value::Number(_) => NodeKind::Number,
            Value::Bool(_) => NodeKind::Bool,
            Value::Null => NodeKind::Null,
        }
    }
}

/// Whether traversal continues into a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Continue,
    Stop,
}

/// Walk the tree depth-first in document order, invoking `visit` once per
/// node with the slash-joined ancestor path. `Descend::Stop` prunes the
/// node's children; siblings are still visited. The tree is never mutated.
pub fn scan<F>(root: &Value, visit: &mut F)
where
    F: FnMut(&str, NodeKind, &Value) -> Descend,
{
    let path = format!("/{}", ROOT_SEGMENT);
    scan_node(&path, root, visit);
}

fn scan_node<F>(path: &str, value: &Value, visit: &mut F)
where
    F: FnMut(&str, NodeKind, &Value) -> Descend,
{
    let kind = NodeKind::of(value);
    trace!(target = "jsonfetch::scanner", path = %path, kind = ?kind, "visiting node");

    if visit(path, kind, value) == Descend::Stop {
        return;
    }

    match value {
        Value::Object(members) => {
            for (name, child) in members {
                let child_path = format!("{}/{}", path, name);
                scan_node(&child_path, child, visit);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let child_path = format!("{}/{}", path, index);
                scan_node(&child_path, child, visit);
            }
        }
        _ => {}
    }
}
