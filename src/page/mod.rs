//! Front-end page loaders.
//!
//! Each loader issues one request through an [`ApiSource`], then updates its
//! target in a single write: the rendered content on success, an inline error
//! message otherwise.

mod container;
mod files;
mod hook;
mod resources;
mod share;
mod source;

pub use container::{Container, MemoryContainer};
pub use files::load_file_listing;
pub use hook::{LoadHook, NoopHook, TracingHook};
pub use resources::load_resources;
pub use share::{load_share_page, FileCard, Prompt, SharePage};
pub use source::{ApiReply, ApiSource, HttpSource, StaticSource};
