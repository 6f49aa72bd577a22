use serde::{Deserialize, Serialize};

/// Label shown for a directory without a usable name.
pub const UNTITLED_FOLDER: &str = "untitled folder";
/// Label shown for a file without a usable name.
pub const UNTITLED_FILE: &str = "untitled file";
/// Link target for a file without a usable url.
pub const PLACEHOLDER_HREF: &str = "#";

/// One entry of a resource tree, as exchanged over `/api/resources`.
///
/// The wire form is tagged by a `type` field holding `directory` or `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResourceNode {
    Directory {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        children: Vec<ResourceNode>,
    },
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl ResourceNode {
    pub fn directory(name: impl Into<String>, children: Vec<ResourceNode>) -> Self {
        Self::Directory {
            name: Some(name.into()),
            children,
        }
    }

    pub fn file(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::File {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }

    /// Raw name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name.as_deref(),
        };
        name.filter(|n| !n.is_empty())
    }

    /// Name to display, falling back to the placeholder label.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Directory { .. } => self.name().unwrap_or(UNTITLED_FOLDER),
            Self::File { .. } => self.name().unwrap_or(UNTITLED_FILE),
        }
    }

    /// Link target of a file; `None` for directories.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Directory { .. } => None,
            Self::File { url, .. } => Some(
                url.as_deref()
                    .filter(|u| !u.is_empty())
                    .unwrap_or(PLACEHOLDER_HREF),
            ),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    pub fn children(&self) -> &[ResourceNode] {
        match self {
            Self::Directory { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// Number of files below (and including) this node.
    pub fn file_count(&self) -> usize {
        match self {
            Self::Directory { children, .. } => children.iter().map(Self::file_count).sum(),
            Self::File { .. } => 1,
        }
    }
}
