use reqwest::{blocking::Client, StatusCode};
use tracing::{debug, info, warn};

use crate::config::FetchConfig;

pub mod events;
pub use events::*;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{}", with_causes(.0))]
    Transport(#[from] reqwest::Error),
    #[error("User not found")]
    UserNotFound,
    #[error("Error fetching events: HTTP status {0}")]
    HttpStatus(u16),
    #[error("Error decoding JSON: {0}")]
    DecodeFailed(#[from] serde_json::Error),
}

/// Joins an error's message with those of its sources, e.g.
/// `error sending request for url (...): client error (Connect): tcp connect error: Connection refused`.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

/// Fetches the first page of public events for `username`.
///
/// Exactly one request is made. The response is dropped before returning, whatever the outcome.
pub fn fetch_events(config: &FetchConfig, username: &str) -> Result<Vec<Event>, FetchError> {
    let url = config.events_url(username);
    info!("fetching events from {}", url);

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()?;
    let response = client.get(&url).send()?;

    let status = response.status();
    debug!("GitHub answered {} for {}", status, url);
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::UserNotFound);
    }
    if !status.is_success() {
        warn!("unexpected status {} for {}", status, url);
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes()?;
    let events: Vec<Event> = serde_json::from_slice(&body)?;
    debug!("decoded {} events", events.len());

    Ok(events)
}
