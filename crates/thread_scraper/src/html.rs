use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
///
/// Wraps `scraper::Html` behind the three lookups the scraper needs:
/// by CSS selector, by class list and by exact attribute value.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    fn root(&self) -> HtmlNode<'_> {
        HtmlNode {
            element: self.html.root_element(),
        }
    }

    pub fn find_all(&self, selector: &str) -> Vec<HtmlNode<'_>> {
        self.root().find_all(selector)
    }

    pub fn find_by_class(&self, tag: &str, classes: &str) -> Vec<HtmlNode<'_>> {
        self.root().find_by_class(tag, classes)
    }

    pub fn find_by_attribute(&self, tag: &str, name: &str, value: &str) -> Vec<HtmlNode<'_>> {
        self.root().find_by_attribute(tag, name, value)
    }
}

/// An element inside an [`HtmlDocument`]; lookups search its descendants.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> HtmlNode<'a> {
    /// Descendants matching a CSS selector. An unparsable selector matches nothing.
    pub fn find_all(&self, selector: &str) -> Vec<HtmlNode<'a>> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.element
            .select(&selector)
            .map(|element| HtmlNode { element })
            .collect()
    }

    /// `tag` descendants carrying every class in the whitespace-separated `classes`.
    pub fn find_by_class(&self, tag: &str, classes: &str) -> Vec<HtmlNode<'a>> {
        let selector: String = std::iter::once(tag.to_string())
            .chain(classes.split_whitespace().map(|class| format!(".{class}")))
            .collect();
        self.find_all(&selector)
    }

    /// `tag` descendants whose `name` attribute equals `value` exactly.
    pub fn find_by_attribute(&self, tag: &str, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(tag)
            .into_iter()
            .filter(|node| node.attr(name) == Some(value))
            .collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// All descendant text concatenated.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Descendant text nodes joined with `separator`.
    pub fn text_with_separator(&self, separator: &str) -> String {
        self.element.text().collect::<Vec<_>>().join(separator)
    }
}
