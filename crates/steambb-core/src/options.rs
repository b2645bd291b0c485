use crate::url::UrlPolicy;

/// Knobs for a single render call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    pub url_policy: UrlPolicy,
}

impl RenderOptions {
    pub fn with_url_policy(mut self, url_policy: UrlPolicy) -> Self {
        self.url_policy = url_policy;
        self
    }
}
