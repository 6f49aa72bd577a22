//! Subcommand implementations

pub mod completions;
pub mod fetch;
pub mod serve;
pub mod share;
pub mod tree;
