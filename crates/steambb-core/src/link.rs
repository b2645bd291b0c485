use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::url::{UrlPolicy, sanitize_url};

static NAMED_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[url=([^\]]*)\](.*?)\[/url\]").expect("valid link pattern"));
static AUTO_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[url\](.*?)\[/url\]").expect("valid auto-link pattern"));

/// Quote characters as they look after escaping.
const QUOTES: [&str; 2] = ["&quot;", "&#039;"];

/// Resolves `[url=DEST]TEXT[/url]` and then `[url]DEST[/url]`.
pub fn resolve_links(text: &str, policy: UrlPolicy) -> String {
    let named = NAMED_LINK.replace_all(text, |caps: &Captures| {
        anchor(unquote(&caps[1]), &caps[2], policy)
    });
    AUTO_LINK
        .replace_all(&named, |caps: &Captures| anchor(&caps[1], &caps[1], policy))
        .into_owned()
}

fn anchor(dest: &str, label: &str, policy: UrlPolicy) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        sanitize_url(dest, policy),
        label
    )
}

/// Strips one leading quote and, when present, the same quote at the end.
fn unquote(dest: &str) -> &str {
    for quote in QUOTES {
        if let Some(inner) = dest.strip_prefix(quote) {
            return inner.strip_suffix(quote).unwrap_or(inner);
        }
    }
    dest
}
