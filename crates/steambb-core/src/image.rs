use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::url::{UrlPolicy, sanitize_url};

const ALT_TEXT: &str = "user image";

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[img\](.*?)\[/img\]").expect("valid image pattern"));

pub fn resolve_images(text: &str, policy: UrlPolicy) -> String {
    IMAGE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<img src=\"{}\" alt=\"{ALT_TEXT}\" loading=\"lazy\">",
                sanitize_url(&caps[1], policy)
            )
        })
        .into_owned()
}
