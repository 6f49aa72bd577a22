//! Single-file share server.

use actix_files::NamedFile;
use actix_web::http::header::{self, ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::api::ShareInfo;
use crate::error::LoadError;
use crate::page::SharePage;
use crate::share::ShareService;

use super::error::ShareError;
use super::no_cache_headers;
use super::page::share_document;

/// Shared state of the share server.
#[derive(Debug, Clone)]
pub struct ShareState {
    pub service: ShareService,
    pub title: String,
}

impl ShareState {
    pub fn new(service: ShareService) -> Self {
        Self {
            service,
            title: "raindrop".to_string(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(
        web::scope("/api")
            .wrap(no_cache_headers())
            .service(info)
            .service(files)
            .service(download),
    );
}

/// The share page, rendered from the same data `/api/info` returns.
#[get("/")]
async fn index(state: web::Data<ShareState>) -> HttpResponse {
    let mut page = SharePage::new(state.title.clone());
    match page_info(&state).await {
        Ok(details) => page.apply(&details),
        Err(err) => page.fail(&LoadError::Api(err.to_string())),
    }

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(share_document(&page.title, &page.to_html()))
}

#[get("/info")]
async fn info(req: HttpRequest, state: web::Data<ShareState>) -> Result<HttpResponse, ShareError> {
    tracing::info!(client = %client_addr(&req), "Session established");
    let details = page_info(&state).await?;
    Ok(HttpResponse::Ok().json(details))
}

#[get("/files")]
async fn files(state: web::Data<ShareState>) -> Result<HttpResponse, ShareError> {
    let listing = state.service.listing().map_err(|err| {
        tracing::warn!(error = %err, "Cannot list shared file");
        ShareError::Listing
    })?;
    Ok(HttpResponse::Ok().json(listing))
}

#[get("/download")]
async fn download(req: HttpRequest, state: web::Data<ShareState>) -> Result<NamedFile, ShareError> {
    let client = client_addr(&req);
    let path = state.service.shared_file().map_err(|err| {
        tracing::warn!(error = %err, %client, "Download failed");
        ShareError::Download(err.to_string())
    })?;
    let name = state.service.shared_file_name().unwrap_or_default();

    // Resumed downloads send Range; only log the first request.
    if !req.headers().contains_key(header::RANGE) {
        tracing::info!(file = %name, %client, "Download started");
    }

    let file = NamedFile::open_async(&path)
        .await
        .map_err(|err| ShareError::Download(err.to_string()))?;

    Ok(file.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(name)],
    }))
}

async fn page_info(state: &web::Data<ShareState>) -> Result<ShareInfo, ShareError> {
    let state = state.clone();
    web::block(move || state.service.page_info())
        .await
        .map_err(|e| ShareError::Info(e.to_string()))?
        .map_err(|e| ShareError::Info(e.to_string()))
}

fn client_addr(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
