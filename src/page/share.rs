use crate::api::{present, ShareInfo, DOWNLOAD_PATH, INFO_PATH};
use crate::error::LoadError;
use crate::render::escape_html;

use super::hook::LoadHook;
use super::source::ApiSource;

const LOADING_TEXT: &str = "Loading...";
const SERVER_TROUBLE: &str = "the server seems to be having trouble";

/// Status line shown above the share page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub hidden: bool,
    pub error: bool,
}

/// The shared file as shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCard {
    pub name: String,
    pub size: String,
    /// Suggested file name for the download link
    pub download_name: Option<String>,
}

impl FileCard {
    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<a class="file-item" href="{}""#, DOWNLOAD_PATH);
        if let Some(download) = &self.download_name {
            html.push_str(&format!(r#" download="{}""#, escape_html(download)));
        }
        html.push_str(&format!(
            r#"><span class="file-name">{}</span><span class="file-size">{}</span></a>"#,
            escape_html(&self.name),
            escape_html(&self.size)
        ));
        html
    }
}

/// State of the single-file share page.
///
/// Each region is only shown once it has something to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePage {
    pub title: String,
    pub prompt: Prompt,
    pub card: Option<FileCard>,
    pub description: Option<String>,
    pub snippet: Option<String>,
}

impl SharePage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: Prompt {
                text: LOADING_TEXT.to_string(),
                hidden: false,
                error: false,
            },
            card: None,
            description: None,
            snippet: None,
        }
    }

    /// Show the parts of `info` that are present and hide the prompt.
    pub fn apply(&mut self, info: &ShareInfo) {
        if let (Some(name), Some(size)) = (present(&info.file_name), present(&info.file_size)) {
            self.card = Some(FileCard {
                name: name.to_string(),
                size: size.to_string(),
                download_name: Some(name.to_string()),
            });
            self.title = format!("{} - {}", name, self.title);
        }

        if let Some(description) = present(&info.description) {
            self.description = Some(description.to_string());
        }

        if let Some(snippet) = present(&info.snippet) {
            self.snippet = Some(snippet.to_string());
        }

        self.prompt.hidden = true;
    }

    /// Turn the prompt into an error message.
    pub fn fail(&mut self, error: &LoadError) {
        self.prompt.text = format!("Oops, something went wrong! {}", error);
        self.prompt.hidden = false;
        self.prompt.error = true;
    }

    /// Body markup of the page.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        let mut prompt_classes = vec!["prompt"];
        if self.prompt.error {
            prompt_classes.push("error");
        }
        if self.prompt.hidden {
            prompt_classes.push("is-hidden");
        }
        html.push_str(&format!(
            r#"<div id="prompt" class="{}">{}</div>"#,
            prompt_classes.join(" "),
            escape_html(&self.prompt.text)
        ));

        html.push_str(&region(
            "div",
            "shareable-file-card",
            "file-card",
            self.card.as_ref().map(FileCard::to_html),
        ));
        html.push_str(&region(
            "div",
            "description-message",
            "message",
            self.description.as_deref().map(escape_html),
        ));
        html.push_str(&region(
            "pre",
            "snippet-content",
            "snippet",
            self.snippet.as_deref().map(escape_html),
        ));

        html
    }
}

fn region(tag: &str, id: &str, class: &str, content: Option<String>) -> String {
    match content {
        Some(content) => format!(r#"<{tag} id="{id}" class="{class}">{content}</{tag}>"#),
        None => format!(r#"<{tag} id="{id}" class="{class} is-hidden"></{tag}>"#),
    }
}

/// Fetch `/api/info` and fill `page` from it.
///
/// On failure the prompt shows the error, which is also returned.
pub fn load_share_page(
    source: &dyn ApiSource,
    page: &mut SharePage,
    hook: &dyn LoadHook,
) -> Result<(), LoadError> {
    hook.on_start(INFO_PATH);

    match fetch_info(source, hook) {
        Ok(info) => {
            page.apply(&info);
            Ok(())
        }
        Err(err) => {
            hook.on_error(INFO_PATH, &err);
            page.fail(&err);
            Err(err)
        }
    }
}

fn fetch_info(source: &dyn ApiSource, hook: &dyn LoadHook) -> Result<ShareInfo, LoadError> {
    let reply = source.get(INFO_PATH)?;
    hook.on_status(INFO_PATH, reply.status);

    if !reply.is_ok() {
        let payload = reply.json::<serde_json::Value>().ok();
        let message = payload
            .as_ref()
            .and_then(|p| p.get("error"))
            .and_then(serde_json::Value::as_str)
            .filter(|e| !e.is_empty())
            .unwrap_or(SERVER_TROUBLE);
        return Err(LoadError::Api(message.to_string()));
    }

    let payload: serde_json::Value = reply.json()?;
    hook.on_payload(INFO_PATH, &payload);
    let info: ShareInfo = serde_json::from_value(payload)?;

    if let Some(message) = present(&info.error) {
        return Err(LoadError::Api(message.to_string()));
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{NoopHook, StaticSource};

    fn load(source: &StaticSource) -> (SharePage, Result<(), LoadError>) {
        let mut page = SharePage::new("raindrop");
        let result = load_share_page(source, &mut page, &NoopHook);
        (page, result)
    }

    #[test]
    fn test_full_info_fills_every_region() {
        let source = StaticSource::new().with_reply(
            INFO_PATH,
            200,
            r#"{"fileName":"a.zip","fileSize":"2.0 KiB","description":"hi","snippet":"let x = 1;"}"#,
        );
        let (page, result) = load(&source);

        assert!(result.is_ok());
        assert_eq!(page.title, "a.zip - raindrop");
        assert!(page.prompt.hidden);
        assert_eq!(page.card.as_ref().unwrap().download_name.as_deref(), Some("a.zip"));
        assert_eq!(page.description.as_deref(), Some("hi"));
        assert_eq!(page.snippet.as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn test_card_needs_name_and_size() {
        let source = StaticSource::new().with_reply(
            INFO_PATH,
            200,
            r#"{"fileName":"a.zip","fileSize":"","description":"only text"}"#,
        );
        let (page, _) = load(&source);

        assert!(page.card.is_none());
        assert_eq!(page.title, "raindrop");
        assert!(page.snippet.is_none());
        assert!(page.to_html().contains(r#"<div id="shareable-file-card" class="file-card is-hidden">"#));
    }

    #[test]
    fn test_http_error_uses_error_field() {
        let source =
            StaticSource::new().with_reply(INFO_PATH, 500, r#"{"error":"cannot read file"}"#);
        let (page, result) = load(&source);

        assert!(result.is_err());
        assert!(page.prompt.error);
        assert!(!page.prompt.hidden);
        assert_eq!(page.prompt.text, "Oops, something went wrong! cannot read file");
    }

    #[test]
    fn test_http_error_without_message() {
        let source = StaticSource::new().with_reply(INFO_PATH, 502, "{}");
        let (page, _) = load(&source);
        assert!(page.prompt.text.ends_with(SERVER_TROUBLE));
    }

    #[test]
    fn test_http_error_with_unexpected_body() {
        let source =
            StaticSource::new().with_reply(INFO_PATH, 500, r#"{"error":{"code":1}}"#);
        let (page, result) = load(&source);
        assert!(matches!(result, Err(LoadError::Api(_))));
        assert!(page.prompt.text.ends_with(SERVER_TROUBLE));

        let source = StaticSource::new().with_reply(INFO_PATH, 502, "<html>Bad Gateway</html>");
        let (page, _) = load(&source);
        assert!(page.prompt.text.ends_with(SERVER_TROUBLE));
    }

    #[test]
    fn test_error_field_fails_even_on_success_status() {
        let source = StaticSource::new().with_reply(INFO_PATH, 200, r#"{"error":"gone"}"#);
        let (page, result) = load(&source);
        assert!(matches!(result, Err(LoadError::Api(_))));
        assert!(page.prompt.text.ends_with("gone"));
    }

    #[test]
    fn test_to_html_escapes_text() {
        let mut page = SharePage::new("t");
        page.apply(&ShareInfo {
            snippet: Some("<script>".into()),
            ..ShareInfo::default()
        });
        let html = page.to_html();

        assert!(html.contains(r#"<pre id="snippet-content" class="snippet">&lt;script&gt;</pre>"#));
        assert!(html.contains(r#"class="prompt is-hidden""#));
    }

    #[test]
    fn test_file_card_markup() {
        let card = FileCard {
            name: "a b.zip".into(),
            size: "1 KiB".into(),
            download_name: Some("a b.zip".into()),
        };
        assert_eq!(
            card.to_html(),
            r#"<a class="file-item" href="/api/download" download="a b.zip"><span class="file-name">a b.zip</span><span class="file-size">1 KiB</span></a>"#
        );
    }
}
