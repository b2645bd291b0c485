/// Escapes the five HTML-significant characters.
///
/// This runs exactly once, over the whole document, before any tag is
/// recognized. Every later stage builds markup from fixed templates around
/// text that has already passed through here.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}
