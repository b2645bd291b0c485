use once_cell::sync::Lazy;
use regex::Regex;

/// Class marker the presentation layer uses to find spoilers.
pub const SPOILER_CLASS: &str = "spoiler";
/// Class the presentation layer toggles on a spoiler once it is revealed.
pub const REVEALED_CLASS: &str = "revealed";

static SPOILER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[spoiler\](.*?)\[/spoiler\]").expect("valid spoiler pattern"));

pub fn resolve_spoilers(text: &str) -> String {
    SPOILER
        .replace_all(text, format!("<span class=\"{SPOILER_CLASS}\">${{1}}</span>").as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::resolve_spoilers;

    #[test]
    fn renders_inert_span() {
        assert_eq!(
            resolve_spoilers("The end: [spoiler]it was a dream[/spoiler]!"),
            "The end: <span class=\"spoiler\">it was a dream</span>!"
        );
    }

    #[test]
    fn keeps_inner_markup() {
        assert_eq!(
            resolve_spoilers("[SPOILER]<b>x</b>[/spoiler]"),
            "<span class=\"spoiler\"><b>x</b></span>"
        );
    }
}
