//! Expand/collapse state of a rendered tree.

use std::collections::HashSet;

use crate::resource::ResourceNode;

use super::tree::{path_key, render_tree, RenderOptions};

/// A resource tree together with the visibility of each directory region.
///
/// Directories are addressed by index path: `[1, 0]` is the first child of
/// the second top-level node. Every region starts collapsed.
#[derive(Debug, Clone)]
pub struct TreeView {
    nodes: Vec<ResourceNode>,
    options: RenderOptions,
    /// Set of expanded directory paths.
    expanded: HashSet<Vec<usize>>,
}

impl TreeView {
    pub fn new(nodes: Vec<ResourceNode>) -> Self {
        Self::with_options(nodes, RenderOptions::default())
    }

    pub fn with_options(nodes: Vec<ResourceNode>, options: RenderOptions) -> Self {
        Self {
            nodes,
            options,
            expanded: HashSet::new(),
        }
    }

    pub fn nodes(&self) -> &[ResourceNode] {
        &self.nodes
    }

    /// Node at `path`, if any.
    pub fn node(&self, path: &[usize]) -> Option<&ResourceNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.nodes.get(*first)?, |node, &i| node.children().get(i))
    }

    /// Whether the region of the directory at `path` is shown.
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.expanded.contains(path)
    }

    /// Flip the visibility of the directory at `path`.
    ///
    /// Returns the new visibility, or `None` when `path` does not name a
    /// directory.
    pub fn toggle(&mut self, path: &[usize]) -> Option<bool> {
        if !self.node(path)?.is_dir() {
            return None;
        }

        let shown = if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_vec());
            true
        };
        tracing::trace!(path = %path_key(path), shown, "Toggled directory");
        Some(shown)
    }

    /// Toggle using the dotted key found in a `data-path` attribute.
    pub fn toggle_key(&mut self, key: &str) -> Option<bool> {
        let path = parse_path_key(key)?;
        self.toggle(&path)
    }

    /// Collapse every directory.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Markup reflecting the current expand/collapse state.
    pub fn render(&self) -> String {
        render_tree(&self.nodes, &self.options, &|path| self.expanded.contains(path))
    }
}

fn parse_path_key(key: &str) -> Option<Vec<usize>> {
    if key.is_empty() {
        return None;
    }
    key.split('.').map(|part| part.parse().ok()).collect()
}
