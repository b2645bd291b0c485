use std::borrow::Cow;

use crate::verbatim::contains_token;

/// Placeholder emitted in place of a rejected destination.
pub const NEUTRAL_URL: &str = "#";

const BLOCKED_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

/// How `[url]` and `[img]` destinations are vetted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UrlPolicy {
    /// Accept `http://`, `https://`, protocol-relative `//` and scheme-less
    /// references. Every other scheme is rejected.
    #[default]
    Allowlist,
    /// Reject `javascript:`, `data:` and `vbscript:` only.
    Blocklist,
}

/// Vets a destination that has already been HTML-escaped.
///
/// Returns the trimmed value when it is acceptable under `policy`, and
/// [`NEUTRAL_URL`] otherwise. Destinations holding a verbatim token are
/// always rejected: their content is restored after this check runs. So
/// are destinations holding raw markup, which in escaped text can only be
/// output of an earlier stage. Square brackets in an accepted value are
/// written as character references.
pub fn sanitize_url(url: &str, policy: UrlPolicy) -> Cow<'_, str> {
    let trimmed = url.trim();
    if contains_token(trimmed) || trimmed.contains(['<', '>', '"']) {
        log::debug!("rejected link destination carrying markup {trimmed:?}");
        return Cow::Borrowed(NEUTRAL_URL);
    }

    // Browsers drop these anywhere in a URL before looking at the scheme.
    let cleaned: Cow<'_, str> = if trimmed.contains(['\t', '\n', '\r']) {
        Cow::Owned(trimmed.replace(['\t', '\n', '\r'], ""))
    } else {
        Cow::Borrowed(trimmed)
    };
    let probe = cleaned.to_ascii_lowercase();

    let accepted = match policy {
        UrlPolicy::Allowlist => {
            probe.starts_with("http://")
                || probe.starts_with("https://")
                || probe.starts_with("//")
                || scheme(&probe).is_none()
        }
        UrlPolicy::Blocklist => !scheme(&probe).is_some_and(|name| BLOCKED_SCHEMES.contains(&name)),
    };

    if !accepted {
        log::debug!("rejected link destination {trimmed:?}");
        return Cow::Borrowed(NEUTRAL_URL);
    }
    // Later stages look for tag markers everywhere, attribute values included.
    if cleaned.contains(['[', ']']) {
        Cow::Owned(cleaned.replace('[', "&#91;").replace(']', "&#93;"))
    } else {
        cleaned
    }
}

/// The scheme of `url`, if any: everything before a `:` that comes ahead of
/// the first `/`, `?` or `#`.
fn scheme(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    if url[end..].starts_with(':') {
        Some(url[..end].trim_start_matches(|ch: char| ch.is_ascii_control() || ch == ' '))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{UrlPolicy, sanitize_url};

    #[test]
    fn allowlist_accepts_web_and_relative_urls() {
        for url in [
            "http://example.com",
            "HTTPS://example.com/a?b=c",
            "//cdn.example.com/x.png",
            "/relative/path",
            "page.html#top",
            "?query=1",
        ] {
            assert_eq!(sanitize_url(url, UrlPolicy::Allowlist), url);
        }
    }

    #[test]
    fn allowlist_rejects_other_schemes() {
        for url in [
            "javascript:alert(1)",
            "JavaScript:alert(1)",
            "data:text/html,hi",
            "vbscript:msgbox",
            "steam://run/440",
            "mailto:someone@example.com",
            "java\tscript:alert(1)",
            "java\nscript:alert(1)",
        ] {
            assert_eq!(sanitize_url(url, UrlPolicy::Allowlist), "#", "{url:?}");
        }
    }

    #[test]
    fn blocklist_rejects_only_listed_schemes() {
        assert_eq!(sanitize_url("javascript:alert(1)", UrlPolicy::Blocklist), "#");
        assert_eq!(sanitize_url("DATA:text/html,x", UrlPolicy::Blocklist), "#");
        assert_eq!(sanitize_url("vbscript:x", UrlPolicy::Blocklist), "#");
        assert_eq!(sanitize_url("java\nscript:x", UrlPolicy::Blocklist), "#");
        assert_eq!(
            sanitize_url("steam://run/440", UrlPolicy::Blocklist),
            "steam://run/440"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            sanitize_url("  https://example.com \n", UrlPolicy::Allowlist),
            "https://example.com"
        );
    }

    #[test]
    fn inner_tabs_and_line_breaks_are_removed() {
        assert_eq!(
            sanitize_url("https://exa\nmple.com/a\tb", UrlPolicy::Allowlist),
            "https://example.com/ab"
        );
    }

    #[test]
    fn leading_control_characters_do_not_hide_a_scheme() {
        assert_eq!(sanitize_url("\u{1}javascript:x", UrlPolicy::Blocklist), "#");
        assert_eq!(sanitize_url("\u{1}javascript:x", UrlPolicy::Allowlist), "#");
    }

    #[test]
    fn verbatim_token_is_never_a_destination() {
        let url = "\u{0}noparse:0\u{0}";
        assert_eq!(sanitize_url(url, UrlPolicy::Allowlist), "#");
        assert_eq!(sanitize_url(url, UrlPolicy::Blocklist), "#");
    }

    #[test]
    fn brackets_are_written_as_references() {
        assert_eq!(
            sanitize_url("/a[img]x[/img]", UrlPolicy::Allowlist),
            "/a&#91;img&#93;x&#91;/img&#93;"
        );
    }

    #[test]
    fn rendered_markup_is_never_a_destination() {
        let url = "<a href=\"x onmouseover=alert(1)//\" target=\"_blank\">y</a>";
        assert_eq!(sanitize_url(url, UrlPolicy::Allowlist), "#");
        assert_eq!(sanitize_url("<b>x</b>", UrlPolicy::Blocklist), "#");
    }
}
