//! Resource trees: the data model, decoding from untrusted JSON, and
//! building a tree from a directory on disk.

mod decode;
mod node;
mod scan;

pub use decode::{decode_nodes, Decoded};
pub use node::{ResourceNode, PLACEHOLDER_HREF, UNTITLED_FILE, UNTITLED_FOLDER};
pub use scan::{scan_resources, ScanOptions};
