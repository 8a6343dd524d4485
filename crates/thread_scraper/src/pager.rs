use crate::html::HtmlDocument;

const SIMPLE_PAGER_TAG: &str = "a";
const SIMPLE_PAGER_CLASSES: &str = "pageNavSimple-el pageNavSimple-el--current";
const NUMBERED_PAGE_LINKS: &str = "li.pageNav-page a";

/// URL of page `page` of a thread: trailing slashes stripped, then `/page-{page}`.
pub fn page_url(thread_url: &str, page: u32) -> String {
    format!("{}/page-{page}", thread_url.trim_end_matches('/'))
}

/// Total page count from a thread's first page. Never less than 1.
///
/// Reads the simple pager ("1 of 7") first, then falls back to the highest
/// numbered pager link.
pub fn detect_page_count(html: &str) -> u32 {
    let doc = HtmlDocument::parse(html);

    let from_simple_pager = doc
        .find_by_class(SIMPLE_PAGER_TAG, SIMPLE_PAGER_CLASSES)
        .first()
        .and_then(|current| {
            current
                .text()
                .split_whitespace()
                .last()
                .and_then(parse_page_number)
        });

    let pages = from_simple_pager.unwrap_or_else(|| {
        doc.find_all(NUMBERED_PAGE_LINKS)
            .iter()
            .filter_map(|link| parse_page_number(link.text().trim()))
            .max()
            .unwrap_or(1)
    });
    pages.max(1)
}

fn parse_page_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
