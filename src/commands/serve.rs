//! Serve command implementation

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::error::{RaindropError, Result};
use crate::render::RenderOptions;
use crate::resource::ScanOptions;
use crate::server::{run_tree_server, TreeState};

/// Run the resource tree server until it is stopped
pub fn run(args: ServeArgs, config: &Config) -> Result<()> {
    let root = args.root.unwrap_or_else(|| config.tree.root.clone());
    if !root.is_dir() {
        return Err(RaindropError::PathNotFound(root));
    }

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);

    let mut state = TreeState::new(root);
    state.scan = ScanOptions::new()
        .with_base_url(config.tree.base_url.clone())
        .with_max_depth(config.tree.max_depth)
        .with_hidden(args.all || config.tree.show_hidden);
    state.render = RenderOptions::new().with_max_depth(config.render.max_depth);

    println!("Serving {} at http://localhost:{}/", state.root.display(), port);

    actix_web::rt::System::new()
        .block_on(run_tree_server(&host, port, state, config.server.cache_max_age))
        .map_err(RaindropError::Server)
}
