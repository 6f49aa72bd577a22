use crate::api::{FileListing, FILES_PATH};
use crate::error::LoadError;
use crate::render::escape_html;

use super::container::Container;
use super::hook::LoadHook;
use super::share::FileCard;
use super::source::ApiSource;

const FETCH_FAILED: &str = "Oops, the server seems to be having trouble, failed to get file information!";

/// Fetch the legacy `/api/files` listing and show it as a file card in `target`.
///
/// On failure `target` shows the error and its class becomes `error`.
pub fn load_file_listing(
    source: &dyn ApiSource,
    target: &mut dyn Container,
    hook: &dyn LoadHook,
) -> Result<(), LoadError> {
    hook.on_start(FILES_PATH);

    match fetch_listing(source, hook) {
        Ok(listing) => {
            target.remove_class("loading");
            let card = FileCard {
                name: listing.name,
                size: listing.size,
                download_name: None,
            };
            target.replace_content(card.to_html());
            Ok(())
        }
        Err(err) => {
            hook.on_error(FILES_PATH, &err);
            target.replace_content(format!("\u{1f622} {}", escape_html(&err.to_string())));
            target.set_class("error");
            Err(err)
        }
    }
}

fn fetch_listing(source: &dyn ApiSource, hook: &dyn LoadHook) -> Result<FileListing, LoadError> {
    let reply = source.get(FILES_PATH)?;
    hook.on_status(FILES_PATH, reply.status);

    if !reply.is_ok() {
        return Err(LoadError::Api(FETCH_FAILED.to_string()));
    }

    let payload: serde_json::Value = reply.json()?;
    hook.on_payload(FILES_PATH, &payload);
    Ok(serde_json::from_value(payload)?)
}
