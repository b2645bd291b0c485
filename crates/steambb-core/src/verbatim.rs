use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape::escape_html;

/// Sentinel that brackets every verbatim token. It is stripped from user
/// input before tokens are inserted, so tokens cannot be forged.
pub(crate) const TOKEN_SENTINEL: char = '\u{0}';

static NOPARSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[noparse\](.*?)\[/noparse\]").expect("valid noparse pattern"));
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x00noparse:(\d+)\x00").expect("valid token pattern"));

/// Escaped `[noparse]` bodies pulled out of a document, indexed by order
/// of first appearance.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VerbatimBlocks {
    blocks: Vec<String>,
}

impl VerbatimBlocks {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(String::as_str)
    }

    fn push(&mut self, escaped: String) -> String {
        let token = token_for(self.blocks.len());
        self.blocks.push(escaped);
        token
    }
}

fn token_for(index: usize) -> String {
    format!("{TOKEN_SENTINEL}noparse:{index}{TOKEN_SENTINEL}")
}

/// Replaces every `[noparse]...[/noparse]` span with an opaque token.
///
/// The body is escaped here, so restoring it later can never reopen an
/// injection vector. Any U+0000 already in the input becomes U+FFFD first.
pub fn extract_verbatim(document: &str) -> (String, VerbatimBlocks) {
    let cleaned = document.replace(TOKEN_SENTINEL, "\u{FFFD}");
    let mut blocks = VerbatimBlocks::default();
    let text = NOPARSE
        .replace_all(&cleaned, |caps: &Captures| blocks.push(escape_html(&caps[1])))
        .into_owned();
    (text, blocks)
}

/// Substitutes the extracted blocks back in place of their tokens.
pub fn restore_verbatim(html: &str, blocks: &VerbatimBlocks) -> String {
    if blocks.is_empty() {
        return html.to_string();
    }
    TOKEN
        .replace_all(html, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| blocks.get(index))
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

pub(crate) fn contains_token(text: &str) -> bool {
    text.contains(TOKEN_SENTINEL)
}
