use serde_json::Value;

use crate::error::LoadError;

/// Optional diagnostics for page loads. Every method defaults to a no-op.
pub trait LoadHook {
    fn on_start(&self, _path: &str) {}

    fn on_status(&self, _path: &str, _status: u16) {}

    fn on_payload(&self, _path: &str, _payload: &Value) {}

    fn on_error(&self, _path: &str, _error: &LoadError) {}
}

/// Hook that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl LoadHook for NoopHook {}

/// Hook that reports each step as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHook;

impl LoadHook for TracingHook {
    fn on_start(&self, path: &str) {
        tracing::info!(path, "Loading");
    }

    fn on_status(&self, path: &str, status: u16) {
        tracing::info!(path, status, "Response received");
    }

    fn on_payload(&self, path: &str, payload: &Value) {
        tracing::debug!(path, %payload, "Response payload");
        if payload.is_object() && payload.get("data").is_some_and(|d| !d.is_array()) {
            tracing::warn!(path, "Response data is not a list");
        }
    }

    fn on_error(&self, path: &str, error: &LoadError) {
        tracing::error!(path, %error, "Load failed");
    }
}
