use std::collections::{HashMap, HashSet};

/// Render summary markdown to sanitized HTML for `dangerous_inner_html`.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre",
        "blockquote", "ul", "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "del",
        "input",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("input", ["type", "checked", "disabled"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_lists_survive_rendering() {
        let html = markdown_to_html("# Title\n\n- one\n- two");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn script_tags_are_stripped() {
        let html = markdown_to_html("hello <script>alert(1)</script> world");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn links_keep_only_the_href() {
        let html = markdown_to_html("[site](https://example.com)");
        assert!(html.contains("href=\"https://example.com\""));
    }
}
