use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\[quote=([^\]]*)\](.*?)\[/quote\]").expect("valid quote pattern")
});
static PLAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[quote\](.*?)\[/quote\]").expect("valid quote pattern"));

/// Resolves `[quote=AUTHOR]...[/quote]` and `[quote]...[/quote]`.
pub fn resolve_quotes(text: &str) -> String {
    let attributed = ATTRIBUTED.replace_all(
        text,
        "<blockquote><div class=\"quote-author\">${1} said:</div>${2}</blockquote>",
    );
    PLAIN
        .replace_all(&attributed, "<blockquote>${1}</blockquote>")
        .into_owned()
}
