use crate::error::ProbeError;
use crate::types::{Classification, ProbeResult};
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use reqwest::{Client, Response};
use std::error::Error;
use std::time::{Duration, Instant};

const BODY_EXCERPT_CHARS: usize = 512;

pub fn build_client(timeout: Duration, user_agent: &str) -> Result<Client, ProbeError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Sends one GET to `url` and captures what came back.
///
/// Only the `send` call is timed. Transport failures are folded into the
/// returned result instead of being propagated.
pub async fn probe(client: &Client, url: &str, timestamp: DateTime<Local>) -> ProbeResult {
    debug!("Sending GET request to {}", url);

    let start = Instant::now();
    let outcome = client.get(url).send().await;
    let elapsed_seconds = start.elapsed().as_secs_f64();

    match outcome {
        Ok(response) => {
            let status_code = response.status().as_u16();
            info!("{} answered {} in {:.3}s", url, status_code, elapsed_seconds);

            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();

            let body_excerpt = match Classification::from_status(status_code) {
                Classification::Unexpected(_) => read_excerpt(response).await,
                _ => None,
            };

            ProbeResult {
                timestamp,
                url: url.to_string(),
                status_code: Some(status_code),
                headers,
                elapsed_seconds,
                error: None,
                body_excerpt,
            }
        }
        Err(e) => {
            let message = describe_error(&e);
            warn!("GET {} failed after {:.3}s: {}", url, elapsed_seconds, message);

            ProbeResult {
                timestamp,
                url: url.to_string(),
                status_code: None,
                headers: Vec::new(),
                elapsed_seconds,
                error: Some(message),
                body_excerpt: None,
            }
        }
    }
}

async fn read_excerpt(response: Response) -> Option<String> {
    match response.text().await {
        Ok(text) if !text.is_empty() => Some(text.chars().take(BODY_EXCERPT_CHARS).collect()),
        Ok(_) => None,
        Err(e) => {
            warn!("Failed to read response body: {}", e);
            None
        }
    }
}

/// Flattens the source chain; reqwest's top-level message rarely names the cause.
fn describe_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    if message.is_empty() {
        message = "unknown request error".to_string();
    }
    message
}
