//! The single-file share service: what `/api/info`, `/api/files` and
//! `/api/download` report about the configured files.

use std::path::{Path, PathBuf};

use humansize::{format_size, BINARY, DECIMAL};

use crate::api::{FileListing, ShareInfo};
use crate::error::{FileCheckError, RaindropError, Result};

/// Check that `path` names an existing regular file.
pub fn check_file(path: &Path) -> std::result::Result<(), FileCheckError> {
    if path.as_os_str().is_empty() {
        return Err(FileCheckError::Empty);
    }

    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FileCheckError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => FileCheckError::PermissionDenied(path.to_path_buf()),
        _ => FileCheckError::Other {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if metadata.is_dir() {
        return Err(FileCheckError::IsDirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Validated share settings.
#[derive(Debug, Clone, Default)]
pub struct ShareService {
    /// Absolute path of the file offered for download
    shared_file: Option<PathBuf>,
    /// Absolute path of a file whose text is shown as a snippet
    content_file: Option<PathBuf>,
    /// Free-form message shown as the description
    message: String,
}

impl ShareService {
    /// Build the service, resolving both paths to absolute ones and checking
    /// that they name files.
    pub fn new(
        shared_file: Option<&Path>,
        content_file: Option<&Path>,
        message: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            shared_file: shared_file.map(resolve_file).transpose()?,
            content_file: content_file.map(resolve_file).transpose()?,
            message: message.into(),
        })
    }

    pub fn shared_file_name(&self) -> Option<String> {
        self.shared_file.as_deref().and_then(file_name)
    }

    /// Contents of `/api/info`.
    ///
    /// A file that has gone missing since startup is left out rather than
    /// reported as an error.
    pub fn page_info(&self) -> Result<ShareInfo> {
        let mut info = ShareInfo::default();

        if let Some(path) = self.content_file.as_deref().filter(|p| check_file(p).is_ok()) {
            let raw = std::fs::read(path).map_err(|e| RaindropError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            let content = String::from_utf8_lossy(&raw).into_owned();
            info.snippet = Some(content).filter(|c| !c.is_empty());
        }

        if let Some(path) = self.shared_file.as_deref().filter(|p| check_file(p).is_ok()) {
            let metadata = std::fs::metadata(path).map_err(|e| RaindropError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            info.file_name = file_name(path);
            info.file_size = Some(format_size(metadata.len(), BINARY));
        }

        if !self.message.is_empty() {
            info.description = Some(self.message.clone());
        }

        Ok(info)
    }

    /// Contents of the legacy `/api/files`. Sizes use SI units there.
    pub fn listing(&self) -> Result<FileListing> {
        let path = self.shared_file()?;
        let metadata = std::fs::metadata(&path).map_err(|e| RaindropError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(FileListing {
            name: file_name(&path).unwrap_or_default(),
            size: format_size(metadata.len(), DECIMAL),
        })
    }

    /// Path of the shared file, if it is still servable.
    pub fn shared_file(&self) -> Result<PathBuf> {
        let path = self
            .shared_file
            .clone()
            .ok_or(RaindropError::FileCheck(FileCheckError::Empty))?;
        check_file(&path)?;
        Ok(path)
    }
}

fn resolve_file(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| RaindropError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    check_file(&absolute)?;
    Ok(absolute)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
