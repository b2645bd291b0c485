use once_cell::sync::Lazy;
use regex::Regex;

/// Paired tags that map one-to-one onto an HTML element, in the order they
/// are substituted. Each entry is a single global, non-greedy pass.
static SIMPLE_TAGS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?is)\[b\](.*?)\[/b\]", "<b>${1}</b>"),
        (r"(?is)\[i\](.*?)\[/i\]", "<i>${1}</i>"),
        (r"(?is)\[u\](.*?)\[/u\]", "<u>${1}</u>"),
        (r"(?is)\[strike\](.*?)\[/strike\]", "<del>${1}</del>"),
        (r"(?is)\[h1\](.*?)\[/h1\]", "<h1>${1}</h1>"),
        (r"(?is)\[h2\](.*?)\[/h2\]", "<h2>${1}</h2>"),
        (r"(?is)\[h3\](.*?)\[/h3\]", "<h3>${1}</h3>"),
        (r"(?is)\[code\](.*?)\[/code\]", "<pre><code>${1}</code></pre>"),
        (r"(?i)\[hr\]\[/hr\]", "<hr>"),
        (r"(?i)\[hr\]", "<hr>"),
    ]
    .into_iter()
    .map(|(pattern, template)| (Regex::new(pattern).expect("valid inline pattern"), template))
    .collect()
});

/// Resolves bold, italic, underline, strike, headings, code and rules.
pub fn resolve_inline(text: &str) -> String {
    let mut html = text.to_string();
    for (pattern, template) in SIMPLE_TAGS.iter() {
        html = pattern.replace_all(&html, *template).into_owned();
    }
    html
}
