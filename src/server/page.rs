//! Full HTML documents around rendered page bodies.

use crate::render::escape_html;

const TREE_TEMPLATE: &str = include_str!("../../assets/tree.html");
const SHARE_TEMPLATE: &str = include_str!("../../assets/share.html");

/// Document for the resource tree page; `tree` is already markup.
pub fn tree_document(title: &str, tree: &str) -> String {
    fill(TREE_TEMPLATE, title, tree)
}

/// Document for the share page; `body` is already markup.
pub fn share_document(title: &str, body: &str) -> String {
    fill(SHARE_TEMPLATE, title, body)
}

fn fill(template: &str, title: &str, body: &str) -> String {
    // Title first, so markup in `body` is never scanned for placeholders.
    let (head, tail) = template.split_once("{{body}}").unwrap_or((template, ""));
    let title = escape_html(title);
    format!(
        "{}{}{}",
        head.replace("{{title}}", &title),
        body,
        tail.replace("{{title}}", &title)
    )
}
