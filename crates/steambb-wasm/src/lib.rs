use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use steambb_core::{RenderOptions, SPOILER_CLASS, UrlPolicy};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsRenderOptions {
    url_policy: Option<JsUrlPolicy>,
    sanitized: Option<bool>,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum JsUrlPolicy {
    Allowlist,
    Blocklist,
}

impl From<JsUrlPolicy> for UrlPolicy {
    fn from(policy: JsUrlPolicy) -> Self {
        match policy {
            JsUrlPolicy::Allowlist => UrlPolicy::Allowlist,
            JsUrlPolicy::Blocklist => UrlPolicy::Blocklist,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    /// Class the editor attaches its reveal toggle to.
    spoiler_class: &'static str,
}

#[wasm_bindgen]
pub fn render_html(source: &str) -> String {
    steambb_core::render(source)
}

#[wasm_bindgen]
pub fn render_html_with_options(source: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let result = RenderResult {
        html: render_with(source, &options),
        spoiler_class: SPOILER_CLASS,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// The showcase document the editor loads on first visit.
#[wasm_bindgen]
pub fn sample_document() -> String {
    steambb_core::SAMPLE_DOCUMENT.to_string()
}

fn render_with(source: &str, options: &JsRenderOptions) -> String {
    let mut render_options = RenderOptions::default();
    if let Some(policy) = options.url_policy {
        render_options = render_options.with_url_policy(policy.into());
    }
    if options.sanitized.unwrap_or(false) {
        steambb_core::render_sanitized_with_options(source, &render_options)
    } else {
        steambb_core::render_with_options(source, &render_options)
    }
}

fn options_from_js(value: JsValue) -> Result<JsRenderOptions, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(JsRenderOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
