use std::time::Duration;

use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the GitHub REST API. Events are fetched from `{api_url}/users/{username}/events`.
    pub api_url: Url,
    /// Timeout for the whole request, from connecting to reading the body.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl FetchConfig {
    pub fn new(api_url: Url, timeout: Duration) -> Self {
        Self {
            api_url,
            timeout,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }

    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events",
            self.api_url.as_str().trim_end_matches('/'),
            username
        )
    }
}
