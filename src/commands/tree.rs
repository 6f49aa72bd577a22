//! Tree command implementation

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::cli::TreeArgs;
use crate::config::Config;
use crate::error::{RaindropError, Result};
use crate::render::{render_value, render_with, RenderOptions};
use crate::resource::{decode_nodes, scan_resources, ResourceNode, ScanOptions};

/// Run the tree command
pub fn run(args: TreeArgs, config: &Config) -> Result<()> {
    let render_options =
        RenderOptions::new().with_max_depth(args.max_depth.unwrap_or(config.render.max_depth));

    let output = match &args.input {
        Some(input) => {
            let value = read_input(input)?;
            if args.json {
                let nodes = decode_input(&value, render_options.max_depth)?;
                serde_json::to_string_pretty(&nodes)?
            } else {
                render_value(&value, &render_options)
            }
        }
        None => {
            let root = args.path.clone().unwrap_or_else(|| config.tree.root.clone());
            let scan_options = ScanOptions::new()
                .with_base_url(args.base_url.clone().unwrap_or_else(|| config.tree.base_url.clone()))
                .with_max_depth(args.max_depth.unwrap_or(config.tree.max_depth))
                .with_hidden(args.all || config.tree.show_hidden);

            tracing::info!(path = %root.display(), "Scanning directory");
            let nodes = scan_resources(&root, &scan_options)?;

            if args.json {
                serde_json::to_string_pretty(&nodes)?
            } else {
                render_with(Some(nodes.as_slice()), &render_options)
            }
        }
    };

    println!("{}", output);
    Ok(())
}

/// Read a JSON document from `path`, or from stdin when it is `-`.
fn read_input(path: &Path) -> Result<Value> {
    let io_error = |source| RaindropError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };

    Ok(serde_json::from_str(&content)?)
}

fn decode_input(value: &Value, max_depth: usize) -> Result<Vec<ResourceNode>> {
    decode_nodes(value, max_depth)
        .map(|decoded| decoded.nodes)
        .ok_or_else(|| RaindropError::InvalidData("expected a JSON array of nodes".into()))
}
