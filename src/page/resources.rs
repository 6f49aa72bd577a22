use serde_json::Value;

use crate::api::RESOURCES_PATH;
use crate::error::LoadError;
use crate::render::{escape_html, render_value, RenderOptions};

use super::container::Container;
use super::hook::LoadHook;
use super::source::ApiSource;

const FALLBACK_MESSAGE: &str = "unexpected data format";

/// Fetch `/api/resources` and write the rendered tree into `target`.
///
/// On failure an inline error message replaces the content instead, and the
/// error is also returned to the caller.
pub fn load_resources(
    source: &dyn ApiSource,
    target: &mut dyn Container,
    options: &RenderOptions,
    hook: &dyn LoadHook,
) -> Result<(), LoadError> {
    hook.on_start(RESOURCES_PATH);

    match fetch_tree(source, options, hook) {
        Ok(html) => {
            target.replace_content(html);
            Ok(())
        }
        Err(err) => {
            hook.on_error(RESOURCES_PATH, &err);
            target.replace_content(error_markup(&err));
            Err(err)
        }
    }
}

fn fetch_tree(
    source: &dyn ApiSource,
    options: &RenderOptions,
    hook: &dyn LoadHook,
) -> Result<String, LoadError> {
    let reply = source.get(RESOURCES_PATH)?;
    hook.on_status(RESOURCES_PATH, reply.status);

    let body: Value = reply.json()?;
    hook.on_payload(RESOURCES_PATH, &body);

    let succeeded = body.get("code").and_then(Value::as_f64) == Some(0.0);
    match body.get("data") {
        Some(data) if succeeded && data.is_array() => Ok(render_value(data, options)),
        _ => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_MESSAGE);
            Err(LoadError::Api(message.to_string()))
        }
    }
}

fn error_markup(err: &LoadError) -> String {
    format!(
        r#"<div class="error">Failed to load: {}</div>"#,
        escape_html(&err.to_string())
    )
}
