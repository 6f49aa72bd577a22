use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::{ResourceEnvelope, ShareInfo};

/// Failures of the resource tree endpoints, reported as `{code: 1, message}`.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("failed to read resource directory: {0}")]
    Scan(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("invalid path: {0}")]
    BadPath(String),
}

impl ResponseError for TreeError {
    fn status_code(&self) -> StatusCode {
        match self {
            TreeError::Scan(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TreeError::NotFound(_) => StatusCode::NOT_FOUND,
            TreeError::BadPath(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ResourceEnvelope::failure(self.to_string()))
    }
}

/// Failures of the share endpoints, reported as `{error}`.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("{0}")]
    Info(String),
    #[error("Failed to get file information")]
    Listing,
    #[error("{0}")]
    Download(String),
}

impl ResponseError for ShareError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ShareInfo::failure(self.to_string()))
    }
}
