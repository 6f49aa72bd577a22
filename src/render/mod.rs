//! Markup rendering of resource trees.
//!
//! The produced list items carry fixed class names (`directory`,
//! `directory-header`, `folder-content`, `file-item`) that the page's click
//! handler and stylesheet depend on.

mod icon;
mod markup;
mod tree;
mod view;

pub use icon::{classify_icon, IconCategory, FOLDER_GLYPH};
pub use markup::{escape_html, push_escaped};
pub use tree::{
    render, render_value, render_with, RenderOptions, DEFAULT_MAX_DEPTH, INVALID_DATA_MARKER,
};
pub use view::TreeView;
