mod escape;
mod image;
mod inline;
mod linebreak;
mod link;
mod list;
mod options;
mod pipeline;
mod quote;
mod sanitize;
mod spoiler;
mod table;
mod url;
mod verbatim;

pub use escape::escape_html;
pub use linebreak::{collapse_block_breaks, normalize_line_breaks};
pub use options::RenderOptions;
pub use pipeline::{Stage, render, render_with_options};
pub use sanitize::{render_sanitized, render_sanitized_with_options};
pub use spoiler::{REVEALED_CLASS, SPOILER_CLASS};
pub use url::{NEUTRAL_URL, UrlPolicy, sanitize_url};
pub use verbatim::{VerbatimBlocks, extract_verbatim, restore_verbatim};

/// Showcase document with one of every supported construct.
pub const SAMPLE_DOCUMENT: &str = include_str!("sample.bbcode");
