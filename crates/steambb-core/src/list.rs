use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const ITEM_MARKER: &str = "[*]";

static ORDERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[olist\](.*?)\[/olist\]").expect("valid olist pattern"));
static UNORDERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[list\](.*?)\[/list\]").expect("valid list pattern"));

/// Resolves `[olist]` into `<ol>` and then `[list]` into `<ul>`.
///
/// Items are the trimmed fragments around `[*]` markers, so text before the
/// first marker is an item too. Blank fragments are dropped.
pub fn resolve_lists(text: &str) -> String {
    let ordered = ORDERED.replace_all(text, |caps: &Captures| list_html("ol", &caps[1]));
    UNORDERED
        .replace_all(&ordered, |caps: &Captures| list_html("ul", &caps[1]))
        .into_owned()
}

fn list_html(tag: &str, body: &str) -> String {
    let mut out = format!("<{tag}>");
    for item in body.split(ITEM_MARKER).map(str::trim).filter(|item| !item.is_empty()) {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
    out
}
