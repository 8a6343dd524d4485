use crate::html::{HtmlDocument, HtmlNode};
use crate::Post;

const AUTHOR_ATTRIBUTE: &str = "data-author";
const THREADMARK_HEADER_CLASSES: &str = "message-cell message-cell--threadmark-header";
const BODY_WRAPPER_CLASS: &str = "bbWrapper";

/// Posts on one page whose author attribute equals `author` exactly, in page order.
pub fn extract_posts(html: &str, author: &str) -> Vec<Post> {
    let doc = HtmlDocument::parse(html);
    doc.find_by_attribute("article", AUTHOR_ATTRIBUTE, author)
        .iter()
        .map(extract_post)
        .collect()
}

fn extract_post(article: &HtmlNode<'_>) -> Post {
    let title = article
        .find_by_class("div", THREADMARK_HEADER_CLASSES)
        .first()
        .and_then(|header| {
            header
                .find_by_attribute("span", "data-xf-init", "tooltip")
                .first()
                .map(|span| span.text().trim().to_string())
        });

    let body = article
        .find_by_class("div", BODY_WRAPPER_CLASS)
        .iter()
        .map(|wrapper| wrapper.text_with_separator("\n").trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    Post { title, body }
}
