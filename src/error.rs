use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum RaindropError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid resource data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    FileCheck(#[from] FileCheckError),

    #[error("Failed to load page: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Reasons a path cannot be served as a single shared file.
#[derive(Error, Debug)]
pub enum FileCheckError {
    #[error("path is empty")]
    Empty,

    #[error("file does not exist: {0:?}")]
    NotFound(PathBuf),

    #[error("permission denied: {0:?}")]
    PermissionDenied(PathBuf),

    #[error("path {0:?} is a directory, a file path is required")]
    IsDirectory(PathBuf),

    #[error("cannot access {path:?}: {source}")]
    Other {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a front-end page load. Only the message text reaches the page,
/// so the variants differ in wording, not in handling.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The server answered, but reported a failure.
    #[error("{0}")]
    Api(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RaindropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("port must not be 0".into());
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let err: RaindropError = config_err.into();
        assert!(matches!(err, RaindropError::Config(_)));
    }

    #[test]
    fn file_check_error_is_transparent() {
        let err: RaindropError = FileCheckError::IsDirectory(PathBuf::from("/tmp")).into();
        assert_eq!(err.to_string(), "path \"/tmp\" is a directory, a file path is required");
    }

    #[test]
    fn load_error_shows_only_the_message() {
        let err = LoadError::Api("no such thing".into());
        assert_eq!(err.to_string(), "no such thing");

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = parse.into();
        assert!(err.to_string().contains("EOF"));
    }
}
