use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::options::RenderOptions;
use crate::pipeline::render_with_options;
use crate::spoiler::{REVEALED_CLASS, SPOILER_CLASS};

/// Renders and then re-cleans the output against an allow-list holding only
/// what the engine itself emits.
pub fn render_sanitized(document: &str) -> String {
    render_sanitized_with_options(document, &RenderOptions::default())
}

pub fn render_sanitized_with_options(document: &str, options: &RenderOptions) -> String {
    let raw_html = render_with_options(document, options);
    if raw_html.is_empty() {
        return raw_html;
    }

    let tags: HashSet<&'static str> = [
        "a",
        "b",
        "blockquote",
        "br",
        "code",
        "del",
        "div",
        "h1",
        "h2",
        "h3",
        "hr",
        "i",
        "img",
        "li",
        "ol",
        "pre",
        "span",
        "table",
        "td",
        "th",
        "tr",
        "u",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href", "target"].iter().copied().collect());
    tag_attributes.insert("img", ["src", "alt", "loading"].iter().copied().collect());

    let mut allowed_classes = HashMap::new();
    allowed_classes.insert("div", ["quote-author"].iter().copied().collect());
    allowed_classes.insert(
        "span",
        [SPOILER_CLASS, REVEALED_CLASS].iter().copied().collect(),
    );

    let url_schemes: HashSet<&'static str> = ["http", "https"].iter().copied().collect();

    Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .allowed_classes(allowed_classes)
        .url_schemes(url_schemes)
        .link_rel(Some("noopener noreferrer"))
        .clean(&raw_html)
        .to_string()
}
