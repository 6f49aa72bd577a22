use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{RaindropError, Result};

use super::node::ResourceNode;

/// Characters escaped in a url path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Options for building a resource tree from a directory.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// URL prefix that file urls are built under
    pub base_url: String,

    /// Maximum depth to recurse (None = unlimited)
    pub max_depth: Option<usize>,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_url: "/api/video".to_string(),
            max_depth: None,
            include_hidden: false,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set maximum recursion depth (1 = only the root's own entries)
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

/// List `root` as a resource tree.
///
/// Entries are ordered by file name. Each file's url is the base url followed
/// by the entry's path relative to `root`. Entries that cannot be read are
/// left out.
pub fn scan_resources(root: &Path, options: &ScanOptions) -> Result<Vec<ResourceNode>> {
    let root = root.canonicalize().map_err(|e| RaindropError::Io {
        path: root.to_path_buf(),
        source: e,
    })?;
    if !root.is_dir() {
        return Err(RaindropError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let mut walker = WalkDir::new(&root).min_depth(1).sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let include_hidden = options.include_hidden;
    let entries = walker
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.file_name()));

    let base_url = options.base_url.trim_end_matches('/');

    // One frame per open directory; frame `d` collects entries at depth `d + 1`.
    let mut stack: Vec<(Option<String>, Vec<ResourceNode>)> = vec![(None, Vec::new())];

    for result in entries {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        close_frames(&mut stack, entry.depth());

        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            stack.push((Some(name), Vec::new()));
        } else {
            let url = file_url(base_url, entry.path().strip_prefix(&root).unwrap_or(entry.path()));
            if let Some((_, children)) = stack.last_mut() {
                children.push(ResourceNode::File {
                    name: Some(name),
                    url: Some(url),
                });
            }
        }
    }

    close_frames(&mut stack, 1);
    let nodes = stack.pop().map(|(_, nodes)| nodes).unwrap_or_default();

    tracing::debug!(root = %root.display(), entries = nodes.len(), "Scanned resources");
    Ok(nodes)
}

/// Fold open directory frames into their parents until `depth` frames remain.
fn close_frames(stack: &mut Vec<(Option<String>, Vec<ResourceNode>)>, depth: usize) {
    while stack.len() > depth {
        let Some((name, children)) = stack.pop() else {
            break;
        };
        if let Some((_, parent)) = stack.last_mut() {
            parent.push(ResourceNode::Directory { name, children });
        }
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn file_url(base_url: &str, relative: &Path) -> String {
    let mut url = base_url.to_string();
    for component in relative.components() {
        url.push('/');
        let segment = component.as_os_str().to_string_lossy();
        url.extend(utf8_percent_encode(&segment, SEGMENT));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_structure() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        File::create(root.join("b.mp4"))
            .unwrap()
            .write_all(b"video")
            .unwrap();
        File::create(root.join("a.txt"))
            .unwrap()
            .write_all(b"text")
            .unwrap();

        fs::create_dir(root.join("photos")).unwrap();
        File::create(root.join("photos/cat.png"))
            .unwrap()
            .write_all(b"png")
            .unwrap();
        fs::create_dir(root.join("photos/empty")).unwrap();

        File::create(root.join(".hidden"))
            .unwrap()
            .write_all(b"secret")
            .unwrap();

        dir
    }

    fn names(nodes: &[ResourceNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.display_name()).collect()
    }

    #[test]
    fn test_scan_sorted_by_name() {
        let dir = create_test_structure();
        let nodes = scan_resources(dir.path(), &ScanOptions::default()).unwrap();

        assert_eq!(names(&nodes), vec!["a.txt", "b.mp4", "photos"]);
    }

    #[test]
    fn test_scan_nests_directories() {
        let dir = create_test_structure();
        let nodes = scan_resources(dir.path(), &ScanOptions::default()).unwrap();

        let photos = nodes.iter().find(|n| n.is_dir()).unwrap();
        assert_eq!(names(photos.children()), vec!["cat.png", "empty"]);

        let empty = &photos.children()[1];
        assert!(empty.is_dir());
        assert!(empty.children().is_empty());
    }

    #[test]
    fn test_scan_builds_urls_under_base() {
        let dir = create_test_structure();
        let options = ScanOptions::new().with_base_url("/files/");
        let nodes = scan_resources(dir.path(), &options).unwrap();

        let photos = nodes.iter().find(|n| n.is_dir()).unwrap();
        assert_eq!(photos.children()[0].href(), Some("/files/photos/cat.png"));
        assert_eq!(nodes[0].href(), Some("/files/a.txt"));
    }

    #[test]
    fn test_file_url_escapes_reserved_characters() {
        assert_eq!(
            file_url("/api/video", Path::new("ep #1?.mp4")),
            "/api/video/ep%20%231%3F.mp4"
        );
        assert_eq!(file_url("/api/video", Path::new("100%/b.mp3")), "/api/video/100%25/b.mp3");
        assert_eq!(file_url("/v", Path::new("café.png")), "/v/caf%C3%A9.png");
    }

    #[test]
    fn test_scan_excludes_hidden() {
        let dir = create_test_structure();
        let nodes = scan_resources(dir.path(), &ScanOptions::new().with_hidden(false)).unwrap();
        assert!(!names(&nodes).contains(&".hidden"));
    }

    #[test]
    fn test_scan_includes_hidden() {
        let dir = create_test_structure();
        let nodes = scan_resources(dir.path(), &ScanOptions::new().with_hidden(true)).unwrap();
        assert_eq!(names(&nodes)[0], ".hidden");
    }

    #[test]
    fn test_scan_max_depth_one() {
        let dir = create_test_structure();
        let nodes = scan_resources(dir.path(), &ScanOptions::new().with_max_depth(1)).unwrap();

        let photos = nodes.iter().find(|n| n.is_dir()).unwrap();
        assert!(photos.children().is_empty());
    }

    #[test]
    fn test_scan_nonexistent_path() {
        let result = scan_resources(Path::new("/nonexistent/path/12345"), &ScanOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_file_root_is_rejected() {
        let dir = create_test_structure();
        let result = scan_resources(&dir.path().join("a.txt"), &ScanOptions::default());
        assert!(matches!(result, Err(RaindropError::InvalidPath(_))));
    }
}
