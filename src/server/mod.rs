//! HTTP servers built on actix-web.

mod error;
mod page;
pub mod share;
pub mod tree;

use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};

pub use error::{ShareError, TreeError};
pub use page::{share_document, tree_document};
pub use share::ShareState;
pub use tree::TreeState;

/// Lets browsers keep responses for `max_age` seconds.
pub fn cache_headers(max_age: u32) -> DefaultHeaders {
    DefaultHeaders::new().add((header::CACHE_CONTROL, format!("max-age={}", max_age)))
}

/// Forbids any caching of API responses.
pub fn no_cache_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"))
        .add((header::PRAGMA, "no-cache"))
        .add((header::EXPIRES, "0"))
}

/// Serve the resource tree until the server is stopped.
pub async fn run_tree_server(
    host: &str,
    port: u16,
    state: TreeState,
    cache_max_age: u32,
) -> std::io::Result<()> {
    tracing::info!(root = %state.root.display(), host, port, "Starting resource server");
    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(cache_headers(cache_max_age))
            .wrap(Logger::default())
            .configure(tree::configure)
    })
    .bind((host, port))?
    .run()
    .await
}

/// Serve the share page until the server is stopped.
pub async fn run_share_server(host: &str, port: u16, state: ShareState) -> std::io::Result<()> {
    tracing::info!(host, port, "Starting share server");
    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .configure(share::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
