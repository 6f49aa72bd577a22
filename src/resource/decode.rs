//! Lenient decoding of resource trees from untrusted JSON.
//!
//! A node whose tag is neither `directory` nor `file`, or a directory without
//! a `children` array, is dropped without failing its siblings. Only a
//! top-level value that is not an array counts as invalid data.

use serde_json::Value;

use super::node::ResourceNode;

/// Outcome of decoding an untrusted node list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    pub nodes: Vec<ResourceNode>,
    /// Nodes dropped because their shape was unrecognised.
    pub skipped: usize,
    /// Directories whose children were cut off by the depth bound.
    pub truncated: usize,
}

/// Decode a JSON array of nodes. Returns `None` if `value` is not an array.
///
/// Directories nested deeper than `max_depth` keep their name but lose their
/// children.
pub fn decode_nodes(value: &Value, max_depth: usize) -> Option<Decoded> {
    let items = value.as_array()?;
    let mut decoded = Decoded::default();
    let nodes = decode_list(items, 1, max_depth, &mut decoded);
    decoded.nodes = nodes;
    if decoded.skipped > 0 {
        tracing::debug!(skipped = decoded.skipped, "Dropped malformed resource nodes");
    }
    if decoded.truncated > 0 {
        tracing::warn!(
            truncated = decoded.truncated,
            max_depth,
            "Resource tree exceeds depth limit, deeper entries omitted"
        );
    }
    Some(decoded)
}

fn decode_list(
    items: &[Value],
    depth: usize,
    max_depth: usize,
    stats: &mut Decoded,
) -> Vec<ResourceNode> {
    items
        .iter()
        .filter_map(|item| {
            let node = decode_node(item, depth, max_depth, stats);
            if node.is_none() {
                stats.skipped += 1;
            }
            node
        })
        .collect()
}

fn decode_node(
    item: &Value,
    depth: usize,
    max_depth: usize,
    stats: &mut Decoded,
) -> Option<ResourceNode> {
    let object = item.as_object()?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    match object.get("type").and_then(Value::as_str)? {
        "directory" => {
            let children = object.get("children")?.as_array()?;
            let children = if depth >= max_depth {
                if !children.is_empty() {
                    stats.truncated += 1;
                }
                Vec::new()
            } else {
                decode_list(children, depth + 1, max_depth, stats)
            };
            Some(ResourceNode::Directory { name, children })
        }
        "file" => {
            let url = object
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(ResourceNode::File { name, url })
        }
        _ => None,
    }
}
