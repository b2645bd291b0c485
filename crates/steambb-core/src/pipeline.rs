use crate::escape::escape_html;
use crate::image::resolve_images;
use crate::inline::resolve_inline;
use crate::linebreak::normalize_line_breaks;
use crate::link::resolve_links;
use crate::list::resolve_lists;
use crate::options::RenderOptions;
use crate::quote::resolve_quotes;
use crate::spoiler::resolve_spoilers;
use crate::table::resolve_tables;
use crate::verbatim::{extract_verbatim, restore_verbatim};

/// One text-to-text pass of the conversion. Verbatim extraction runs before
/// the first stage and restoration after the last.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Escape,
    Inline,
    Links,
    Quotes,
    Spoilers,
    Images,
    Lists,
    Tables,
    LineBreaks,
}

impl Stage {
    /// The only order in which the stages are sound. Escaping must come
    /// first; line-break normalization must see every resolved block.
    pub const ORDER: [Stage; 9] = [
        Stage::Escape,
        Stage::Inline,
        Stage::Links,
        Stage::Quotes,
        Stage::Spoilers,
        Stage::Images,
        Stage::Lists,
        Stage::Tables,
        Stage::LineBreaks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Escape => "escape",
            Stage::Inline => "inline",
            Stage::Links => "links",
            Stage::Quotes => "quotes",
            Stage::Spoilers => "spoilers",
            Stage::Images => "images",
            Stage::Lists => "lists",
            Stage::Tables => "tables",
            Stage::LineBreaks => "line-breaks",
        }
    }

    pub fn apply(self, text: &str, options: &RenderOptions) -> String {
        match self {
            Stage::Escape => escape_html(text),
            Stage::Inline => resolve_inline(text),
            Stage::Links => resolve_links(text, options.url_policy),
            Stage::Quotes => resolve_quotes(text),
            Stage::Spoilers => resolve_spoilers(text),
            Stage::Images => resolve_images(text, options.url_policy),
            Stage::Lists => resolve_lists(text),
            Stage::Tables => resolve_tables(text),
            Stage::LineBreaks => normalize_line_breaks(text),
        }
    }
}

/// Converts a BBCode document to HTML with default options.
pub fn render(document: &str) -> String {
    render_with_options(document, &RenderOptions::default())
}

/// Converts a BBCode document to HTML. Never fails: anything no stage
/// recognizes comes out as escaped literal text.
pub fn render_with_options(document: &str, options: &RenderOptions) -> String {
    if document.is_empty() {
        return String::new();
    }

    let (text, blocks) = extract_verbatim(document);
    log::debug!("extracted {} verbatim block(s)", blocks.len());

    let html = Stage::ORDER.iter().fold(text, |text, stage| {
        let next = stage.apply(&text, options);
        log::trace!("stage {}: {} -> {} bytes", stage.name(), text.len(), next.len());
        next
    });

    let html = restore_verbatim(&html, &blocks);
    log::debug!("rendered {} bytes into {} bytes", document.len(), html.len());
    html
}
