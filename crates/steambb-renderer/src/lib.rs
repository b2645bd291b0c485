use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use steambb_core::{REVEALED_CLASS, SPOILER_CLASS};

const BASE_CSS: &str = include_str!("../assets/steambb.css");
pub const STYLESHEET_FILE: &str = "steambb.css";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Auto,
    Light,
    Dark,
}

/// Wraps rendered fragments into standalone pages.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    custom_vars: BTreeMap<String, String>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            custom_vars: BTreeMap::new(),
        }
    }

    /// Overrides a CSS custom property, e.g. `--steambb-accent`.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_vars.insert(key.into(), value.into());
        self
    }

    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        let (light_vars, dark_vars) = default_theme_vars();

        match self.theme {
            Theme::Auto => {
                out.push_str(&root_block(&light_vars, true));
                out.push_str("@media (prefers-color-scheme: dark) {\n");
                out.push_str(&indent_root_block(&dark_vars));
                out.push_str("}\n");
            }
            Theme::Light => out.push_str(&root_block(&light_vars, true)),
            Theme::Dark => out.push_str(&root_block(&dark_vars, true)),
        }

        if !self.custom_vars.is_empty() {
            out.push_str(&root_block(&self.custom_vars, false));
        }

        out.push_str(BASE_CSS);
        out.push_str(&spoiler_rules());
        out
    }

    pub fn embed_html(&self, html: &str, with_inline_css: bool) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        out.push_str("  <title>Steam BBCode Preview</title>\n");
        if with_inline_css {
            out.push_str("  <style>\n");
            out.push_str(&self.stylesheet());
            out.push_str("\n  </style>\n");
        }
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str("<article class=\"steambb-preview\">\n");
        out.push_str(html);
        if !html.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("</article>\n");
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    pub fn generate_files(&self, out_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(out_dir)?;
        fs::write(out_dir.join(STYLESHEET_FILE), self.stylesheet())?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

fn default_theme_vars() -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let light = BTreeMap::from([
        ("--steambb-bg".to_string(), "#f5f7fa".to_string()),
        ("--steambb-fg".to_string(), "#2a2f36".to_string()),
        ("--steambb-heading".to_string(), "#1b2838".to_string()),
        ("--steambb-muted".to_string(), "#6b7785".to_string()),
        ("--steambb-border".to_string(), "#cfd6de".to_string()),
        ("--steambb-accent".to_string(), "#1a73c9".to_string()),
        ("--steambb-code-bg".to_string(), "#eef1f5".to_string()),
        ("--steambb-code-fg".to_string(), "#2a2f36".to_string()),
        ("--steambb-box-bg".to_string(), "#e9edf2".to_string()),
        ("--steambb-box-border".to_string(), "#b8c3cf".to_string()),
        ("--steambb-spoiler".to_string(), "#2a2f36".to_string()),
    ]);

    let dark = BTreeMap::from([
        ("--steambb-bg".to_string(), "#1b2838".to_string()),
        ("--steambb-fg".to_string(), "#acb2b8".to_string()),
        ("--steambb-heading".to_string(), "#ffffff".to_string()),
        ("--steambb-muted".to_string(), "#8f98a0".to_string()),
        ("--steambb-border".to_string(), "#2a475e".to_string()),
        ("--steambb-accent".to_string(), "#66c0f4".to_string()),
        ("--steambb-code-bg".to_string(), "#101822".to_string()),
        ("--steambb-code-fg".to_string(), "#c6d4df".to_string()),
        ("--steambb-box-bg".to_string(), "#16202d".to_string()),
        ("--steambb-box-border".to_string(), "#3d5a73".to_string()),
        ("--steambb-spoiler".to_string(), "#000000".to_string()),
    ]);

    (light, dark)
}

/// Spoilers are hidden until hovered or marked revealed by a host script.
fn spoiler_rules() -> String {
    format!(
        "\n.steambb-preview .{SPOILER_CLASS} {{\n  background: var(--steambb-spoiler);\n  color: transparent;\n  padding: 0 2px;\n  cursor: pointer;\n  transition: color 0.15s ease-in-out;\n}}\n\n.steambb-preview .{SPOILER_CLASS}:hover,\n.steambb-preview .{SPOILER_CLASS}.{REVEALED_CLASS} {{\n  color: var(--steambb-fg);\n}}\n"
    )
}

fn format_vars(vars: &BTreeMap<String, String>, indent: &str) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        out.push_str(indent);
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out
}

fn root_block(vars: &BTreeMap<String, String>, include_color_scheme: bool) -> String {
    let mut out = String::new();
    out.push_str(":root {\n");
    if include_color_scheme {
        out.push_str("  color-scheme: light dark;\n");
    }
    out.push_str(&format_vars(vars, "  "));
    out.push_str("}\n");
    out
}

fn indent_root_block(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str("  :root {\n");
    out.push_str("    color-scheme: light dark;\n");
    out.push_str(&format_vars(vars, "    "));
    out.push_str("  }\n");
    out
}
