use once_cell::sync::Lazy;
use regex::Regex;

const BREAK: &str = "<br>";

/// Elements whose boundaries swallow adjacent breaks.
const BLOCK_TAGS: &str = "table|thead|tbody|tr|th|td|ul|ol|li|blockquote|div|h[1-6]|hr|pre";

static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<pre.*?</pre>").expect("valid code block pattern"));
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").expect("valid newline pattern"));

/// Cleanup rules, applied in order. Every replacement keeps only the
/// captured tags, so an effective rule application always shortens the
/// text.
static CLEANUP_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)(<table>)(?:\s*<br>\s*)*".to_string(), "${1}"),
        (r"(?i)(?:\s*<br>\s*)*(</table>)".to_string(), "${1}"),
        (r"(?i)(<tr>)(?:\s*<br>\s*)*".to_string(), "${1}"),
        (r"(?i)(?:\s*<br>\s*)*(</tr>)".to_string(), "${1}"),
        (r"(?i)(</tr>)(?:\s*<br>\s*)*".to_string(), "${1}"),
        (r"(?i)(</th>)(?:\s*<br>\s*)*(<th>)".to_string(), "${1}${2}"),
        (r"(?i)(</td>)(?:\s*<br>\s*)*(<td>)".to_string(), "${1}${2}"),
        (format!(r"(?i)(?:<br>\s*)+(<(?:{BLOCK_TAGS})[\s>])"), "${1}"),
        (format!(r"(?i)(</(?:{BLOCK_TAGS})>)(?:\s*<br>)+"), "${1}"),
        (format!(r"(?i)(<(?:{BLOCK_TAGS})(?:\s[^>]*)?>)(?:\s*<br>)+"), "${1}"),
        (format!(r"(?i)(?:<br>\s*)+(</(?:{BLOCK_TAGS})>)"), "${1}"),
    ]
    .into_iter()
    .map(|(pattern, template)| (Regex::new(&pattern).expect("valid cleanup pattern"), template))
    .collect()
});

/// Turns literal newlines into `<br>` everywhere except inside
/// `<pre>...</pre>`, then strips breaks that only pad block boundaries.
pub fn normalize_line_breaks(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + html.len() / 8);
    let mut last = 0;
    for code in CODE_BLOCK.find_iter(html) {
        out.push_str(&NEWLINE.replace_all(&html[last..code.start()], BREAK));
        out.push_str(code.as_str());
        last = code.end();
    }
    out.push_str(&NEWLINE.replace_all(&html[last..], BREAK));
    collapse_block_breaks(&out)
}

/// Removes breaks adjacent to block element boundaries.
///
/// Runs the rule set until nothing changes, so applying it to its own
/// output is a no-op. Code block interiors never contain `<br>` at this
/// point, and every rule needs one to remove anything, so they are left
/// intact.
pub fn collapse_block_breaks(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let mut next = current.clone();
        for (pattern, template) in CLEANUP_RULES.iter() {
            next = pattern.replace_all(&next, *template).into_owned();
        }
        if next == current {
            return current;
        }
        current = next;
    }
}
