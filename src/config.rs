use serde::Deserialize;
use url::Url;

/// Connection settings for the remote profile API.
///
/// Injected into [`crate::api::profile::http::HttpProfileService`] at
/// construction; there is no process-wide settings singleton.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileApiConfig {
    /// Base URL of the profiles resource, e.g. `https://api.example.com/api/profiles`.
    pub base_url: Url,
    /// Optional bearer token attached to every request.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl ProfileApiConfig {
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            bearer_token: None,
        }
    }

    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}
