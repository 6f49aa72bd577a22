use serde_json::Value;

use crate::resource::{decode_nodes, ResourceNode};

use super::icon::{classify_icon, FOLDER_GLYPH};
use super::markup::push_escaped;

/// Nesting depth rendered before subtrees are cut off.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Emitted in place of a tree when the input is absent or not a list.
pub const INVALID_DATA_MARKER: &str = r#"<div class="error">invalid resource data</div>"#;

const HIDDEN_STYLE: &str = "display: none;";
const SHOWN_STYLE: &str = "display: block;";

/// Options for tree rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Deepest list level whose directories are descended into
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }
}

/// Render a node list as a collapsible tree with every directory collapsed.
pub fn render(nodes: Option<&[ResourceNode]>) -> String {
    render_with(nodes, &RenderOptions::default())
}

/// Render with explicit options.
pub fn render_with(nodes: Option<&[ResourceNode]>, options: &RenderOptions) -> String {
    match nodes {
        Some(nodes) => render_tree(nodes, options, &|_| false),
        None => INVALID_DATA_MARKER.to_string(),
    }
}

/// Decode an untrusted JSON node list and render it.
///
/// Anything other than a JSON array yields the invalid-data marker.
pub fn render_value(value: &Value, options: &RenderOptions) -> String {
    match decode_nodes(value, options.max_depth) {
        Some(decoded) => render_tree(&decoded.nodes, options, &|_| false),
        None => INVALID_DATA_MARKER.to_string(),
    }
}

/// Render `nodes`, asking `is_expanded` for the visibility of each
/// directory's region. Directories are addressed by their index path.
pub(crate) fn render_tree(
    nodes: &[ResourceNode],
    options: &RenderOptions,
    is_expanded: &dyn Fn(&[usize]) -> bool,
) -> String {
    let mut renderer = TreeRenderer {
        options,
        is_expanded,
        path: Vec::new(),
        output: String::new(),
        truncated: 0,
    };
    renderer.list(nodes, 1);

    if renderer.truncated > 0 {
        tracing::warn!(
            truncated = renderer.truncated,
            max_depth = options.max_depth,
            "Tree exceeds render depth, deeper entries omitted"
        );
    }
    renderer.output
}

struct TreeRenderer<'a> {
    options: &'a RenderOptions,
    is_expanded: &'a dyn Fn(&[usize]) -> bool,
    path: Vec<usize>,
    output: String,
    truncated: usize,
}

impl TreeRenderer<'_> {
    fn list(&mut self, nodes: &[ResourceNode], depth: usize) {
        self.output.push_str("<ul>");
        for (index, node) in nodes.iter().enumerate() {
            self.path.push(index);
            self.node(node, depth);
            self.path.pop();
        }
        self.output.push_str("</ul>");
    }

    fn node(&mut self, node: &ResourceNode, depth: usize) {
        match node {
            ResourceNode::Directory { children, .. } => {
                let style = if (self.is_expanded)(self.path.as_slice()) {
                    SHOWN_STYLE
                } else {
                    HIDDEN_STYLE
                };

                self.output.push_str(r#"<li class="directory" data-path=""#);
                self.output.push_str(&path_key(&self.path));
                self.output.push_str(r#""><div class="directory-header"><span class="directory-icon">"#);
                self.output.push_str(FOLDER_GLYPH);
                self.output.push_str(r#"</span><span class="directory-name">"#);
                push_escaped(&mut self.output, node.display_name());
                self.output.push_str(r#"</span></div><div class="folder-content" style=""#);
                self.output.push_str(style);
                self.output.push_str(r#"">"#);

                if depth < self.options.max_depth {
                    self.list(children, depth + 1);
                } else {
                    if !children.is_empty() {
                        self.truncated += 1;
                    }
                    self.list(&[], depth + 1);
                }

                self.output.push_str("</div></li>");
            }
            ResourceNode::File { .. } => {
                let icon = classify_icon(node.name().unwrap_or(""));

                self.output.push_str(r#"<li class="file-item"><span class="file-icon" data-icon=""#);
                self.output.push_str(icon.as_str());
                self.output.push_str(r#"">"#);
                self.output.push_str(icon.glyph());
                self.output.push_str(r#"</span><a href=""#);
                push_escaped(&mut self.output, node.href().unwrap_or_default());
                self.output.push_str(r#"" target="_blank" rel="noopener" class="file-name">"#);
                push_escaped(&mut self.output, node.display_name());
                self.output.push_str("</a></li>");
            }
        }
    }
}

/// Dotted form of an index path, e.g. `0.2.1`.
pub(crate) fn path_key(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
