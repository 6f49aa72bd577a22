//! Raindrop - browse and share files over HTTP
//!
//! This crate provides functionality for:
//! - Rendering resource trees as collapsible HTML lists
//! - Serving a directory as a resource tree with streamable files
//! - Sharing a single file through a download page
//! - Loading those pages from a running server

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod page;
pub mod render;
pub mod resource;
pub mod server;
pub mod share;

// Re-export commonly used types
pub use config::Config;
pub use error::{RaindropError, Result};
pub use render::{classify_icon, render, IconCategory, TreeView};
pub use resource::ResourceNode;
