use pretty_assertions::assert_eq;
use thread_scraper::{detect_page_count, extract_posts, Post};

#[test]
fn simple_pager_gives_total() {
    let html = r#"
    <div class="pageNavSimple">
        <a class="pageNavSimple-el pageNavSimple-el--first">First</a>
        <a class="pageNavSimple-el pageNavSimple-el--current">1 of 7</a>
    </div>"#;
    assert_eq!(detect_page_count(html), 7);
}

#[test]
fn numbered_links_give_highest_page() {
    let html = r#"
    <ul class="pageNav-main">
        <li class="pageNav-page pageNav-page--current"><a href="/t/page-1">1</a></li>
        <li class="pageNav-page"><a href="/t/page-2">2</a></li>
        <li class="pageNav-page"><a href="/t/page-3">3</a></li>
        <li class="pageNav-page pageNav-page--skip"><a>&hellip;</a></li>
        <li class="pageNav-page"><a href="/t/page-5">5</a></li>
    </ul>"#;
    assert_eq!(detect_page_count(html), 5);
}

#[test]
fn non_numeric_simple_pager_falls_back_to_links() {
    let html = r#"
        <a class="pageNavSimple-el pageNavSimple-el--current">Page one</a>
        <ul><li class="pageNav-page"><a>4</a></li></ul>"#;
    assert_eq!(detect_page_count(html), 4);
}

#[test]
fn missing_pager_means_single_page() {
    assert_eq!(detect_page_count("<html><body><p>no pager</p></body></html>"), 1);
    assert_eq!(detect_page_count(""), 1);
}

#[test]
fn zero_total_is_clamped_to_one() {
    let html = r#"<a class="pageNavSimple-el pageNavSimple-el--current">0 of 0</a>"#;
    assert_eq!(detect_page_count(html), 1);
}

const THREAD_PAGE: &str = r#"
<html><body>
<article class="message" data-author="alice">
    <div class="message-cell message-cell--threadmark-header">
        <label>Threadmarks</label>
        <span data-xf-init="tooltip" title="Chapter">  Chapter 1: Arrival  </span>
    </div>
    <div class="message-content">
        <div class="bbWrapper">First line<br>Second <b>line</b></div>
    </div>
</article>
<article class="message" data-author="bob">
    <div class="bbWrapper">Bob talks</div>
</article>
<article class="message" data-author="Alice">
    <div class="bbWrapper">Not the same author</div>
</article>
<article class="message" data-author="alice">
    <div class="bbWrapper">  Second post  </div>
    <div class="bbWrapper">   </div>
    <div class="bbWrapper">Quoted reply</div>
</article>
<article class="message" data-author="alice"></article>
</body></html>
"#;

#[test]
fn only_exact_author_matches_are_returned_in_order() {
    let posts = extract_posts(THREAD_PAGE, "alice");
    assert_eq!(
        posts,
        vec![
            Post {
                title: Some("Chapter 1: Arrival".to_string()),
                body: vec!["First line\nSecond \nline".to_string()],
            },
            Post {
                title: None,
                body: vec!["Second post".to_string(), "Quoted reply".to_string()],
            },
            Post::default(),
        ]
    );
}

#[test]
fn other_authors_are_filtered_out() {
    let posts = extract_posts(THREAD_PAGE, "bob");
    assert_eq!(
        posts,
        vec![Post {
            title: None,
            body: vec!["Bob talks".to_string()],
        }]
    );
    assert!(extract_posts(THREAD_PAGE, "carol").is_empty());
    assert!(extract_posts(THREAD_PAGE, "ali").is_empty());
}

#[test]
fn header_without_tooltip_span_yields_no_title() {
    let html = r#"
    <article data-author="alice">
        <div class="message-cell message-cell--threadmark-header"><span>plain</span></div>
        <div class="bbWrapper">body</div>
    </article>"#;
    let posts = extract_posts(html, "alice");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, None);
    assert_eq!(posts[0].body, vec!["body".to_string()]);
}
