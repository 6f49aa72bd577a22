//! Fetch command implementation

use crate::cli::{FetchArgs, PageKind};
use crate::config::Config;
use crate::error::{LoadError, Result};
use crate::page::{
    load_file_listing, load_resources, load_share_page, ApiSource, HttpSource, MemoryContainer,
    SharePage, TracingHook,
};
use crate::render::RenderOptions;

/// Load one page region from a running server and print its markup.
///
/// The region is printed even when loading fails, since it then carries the
/// error message the page would show.
pub fn run(args: FetchArgs, config: &Config) -> Result<()> {
    let source = HttpSource::new(&args.url)?;
    let options =
        RenderOptions::new().with_max_depth(args.max_depth.unwrap_or(config.render.max_depth));

    tracing::info!(url = source.base_url(), page = ?args.page, "Fetching page");
    let (html, result) = load_page(&source, args.page, &options);

    println!("{}", html);
    result?;
    Ok(())
}

fn load_page(
    source: &dyn ApiSource,
    page: PageKind,
    options: &RenderOptions,
) -> (String, std::result::Result<(), LoadError>) {
    match page {
        PageKind::Resources => {
            let mut target = MemoryContainer::new("resources");
            let result = load_resources(source, &mut target, options, &TracingHook);
            (target.to_html(), result)
        }
        PageKind::Share => {
            let mut page = SharePage::new("raindrop");
            let result = load_share_page(source, &mut page, &TracingHook);
            (page.to_html(), result)
        }
        PageKind::Files => {
            let mut target = MemoryContainer::new("file-list").with_content("", &["loading"]);
            let result = load_file_listing(source, &mut target, &TracingHook);
            (target.to_html(), result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FILES_PATH, INFO_PATH, RESOURCES_PATH};
    use crate::page::StaticSource;

    #[test]
    fn test_load_resources_region() {
        let source = StaticSource::new().with_reply(
            RESOURCES_PATH,
            200,
            r#"{"code":0,"data":[{"type":"file","name":"a.png","url":"/a.png"}]}"#,
        );
        let (html, result) = load_page(&source, PageKind::Resources, &RenderOptions::new());

        assert!(result.is_ok());
        assert!(html.starts_with(r#"<div id="resources""#));
        assert!(html.contains(r#"data-icon="image""#));
    }

    #[test]
    fn test_load_share_region_failure_is_printed() {
        let source = StaticSource::new().with_failure(INFO_PATH, "connection refused");
        let (html, result) = load_page(&source, PageKind::Share, &RenderOptions::new());

        assert!(result.is_err());
        assert!(html.contains("Oops, something went wrong! connection refused"));
    }

    #[test]
    fn test_load_files_region() {
        let source =
            StaticSource::new().with_reply(FILES_PATH, 200, r#"{"Name":"a.zip","Size":"1.0 kB"}"#);
        let (html, result) = load_page(&source, PageKind::Files, &RenderOptions::new());

        assert!(result.is_ok());
        assert!(html.contains(r#"<span class="file-name">a.zip</span>"#));
        assert!(!html.contains("loading"));
    }
}
