//! Resource tree server: the page, the JSON listing and the files themselves.

use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::api::ResourceEnvelope;
use crate::render::{escape_html, render_with, RenderOptions};
use crate::resource::{scan_resources, ResourceNode, ScanOptions};

use super::error::TreeError;
use super::page::tree_document;

/// Shared state of the resource tree server.
#[derive(Debug, Clone)]
pub struct TreeState {
    /// Directory being listed and served
    pub root: PathBuf,
    /// Page heading and title
    pub title: String,
    pub scan: ScanOptions,
    pub render: RenderOptions,
}

impl TreeState {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            title: "Resources".to_string(),
            scan: ScanOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(web::scope("/api").service(resources).service(media));
}

#[get("/")]
async fn index(state: web::Data<TreeState>) -> HttpResponse {
    let markup = match scan(&state).await {
        Ok(nodes) => render_with(Some(nodes.as_slice()), &state.render),
        Err(err) => {
            tracing::warn!(error = %err, "Rendering page without resources");
            format!(
                r#"<div class="error">Failed to load: {}</div>"#,
                escape_html(&err.to_string())
            )
        }
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(tree_document(&state.title, &markup))
}

#[get("/resources")]
async fn resources(state: web::Data<TreeState>) -> Result<HttpResponse, TreeError> {
    let nodes = scan(&state).await?;
    tracing::debug!(entries = nodes.len(), "Listing resources");
    Ok(HttpResponse::Ok().json(ResourceEnvelope::ok(nodes)))
}

/// Files under the root. `NamedFile` answers Range requests itself.
#[get("/video/{path:.*}")]
async fn media(
    path: web::Path<String>,
    state: web::Data<TreeState>,
) -> Result<NamedFile, TreeError> {
    let requested = path.into_inner();
    let file = resolve_media_path(&state.root, &requested, state.scan.include_hidden)?;

    if !file.is_file() {
        return Err(TreeError::NotFound(requested));
    }
    NamedFile::open_async(&file)
        .await
        .map_err(|_| TreeError::NotFound(requested))
}

async fn scan(state: &web::Data<TreeState>) -> Result<Vec<ResourceNode>, TreeError> {
    let state = state.clone();
    web::block(move || scan_resources(&state.root, &state.scan))
        .await
        .map_err(|e| TreeError::Scan(e.to_string()))?
        .map_err(|e| TreeError::Scan(e.to_string()))
}

/// Join `requested` onto `root`, refusing anything that could leave it.
fn resolve_media_path(
    root: &Path,
    requested: &str,
    include_hidden: bool,
) -> Result<PathBuf, TreeError> {
    let relative = Path::new(requested);
    let mut components = relative.components().peekable();
    if components.peek().is_none() {
        return Err(TreeError::BadPath(requested.to_string()));
    }

    for component in components {
        let Component::Normal(segment) = component else {
            return Err(TreeError::BadPath(requested.to_string()));
        };
        if !include_hidden && segment.to_string_lossy().starts_with('.') {
            return Err(TreeError::NotFound(requested.to_string()));
        }
    }

    Ok(root.join(relative))
}
